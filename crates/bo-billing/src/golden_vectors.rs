// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Pinned figures for the fee calculation
//!
//! A change to any of these numbers changes what founders are told they owe.

use bo_domain_types::{BillingSnapshot, Coupon};
use serde_json::json;

use crate::calculator::FeeCalculator;

fn calculator() -> FeeCalculator {
    FeeCalculator::default()
}

#[test]
fn two_founders_without_coupon() {
    let snapshot = BillingSnapshot::new(2);
    let breakdown = calculator().breakdown(&snapshot);

    assert_eq!(breakdown.total_fee, 200_000);
    assert_eq!(breakdown.payable_fee, 200_000);
    assert_eq!(breakdown.remaining_payable, 200_000);
    assert_eq!(breakdown.emi_undiscounted, 33_333);
    assert_eq!(breakdown.emi, 33_333);

    assert_eq!(
        serde_json::to_value(calculator().calculate(&snapshot)).unwrap(),
        json!({ "fee": { "payableFee": 200000, "emiUndiscounted": 33333, "emi": 33333 } })
    );
}

#[test]
fn two_founders_half_coupon_partially_paid() {
    let snapshot = BillingSnapshot::new(2)
        .with_paid_fee(50_000)
        .with_coupon(Coupon::new("HALF", 50).with_instructions("Mention HALF on the invoice"));
    let breakdown = calculator().breakdown(&snapshot);

    assert_eq!(breakdown.payable_fee, 100_000);
    assert_eq!(breakdown.remaining_payable, 50_000);
    assert_eq!(breakdown.calculated_emi, 16_667);
    assert_eq!(breakdown.emi, 16_667);

    assert_eq!(
        serde_json::to_value(calculator().calculate(&snapshot)).unwrap(),
        json!({
            "fee": { "payableFee": 100000, "emiUndiscounted": 33333, "emi": 16667 },
            "coupon": {
                "code": "HALF",
                "discount": 50,
                "instructions": "Mention HALF on the invoice"
            }
        })
    );
}

#[test]
fn last_installment_is_capped_by_remaining() {
    let snapshot = BillingSnapshot::new(1)
        .with_paid_fee(49_999)
        .with_coupon(Coupon::new("HALF", 50));
    let breakdown = calculator().breakdown(&snapshot);

    assert_eq!(breakdown.payable_fee, 50_000);
    assert_eq!(breakdown.remaining_payable, 1);
    assert_eq!(breakdown.calculated_emi, 8_333);
    assert_eq!(breakdown.emi, 1);
}

#[test]
fn overpayment_gives_negative_emi() {
    let snapshot = BillingSnapshot::new(1).with_paid_fee(120_000);
    let breakdown = calculator().breakdown(&snapshot);

    assert_eq!(breakdown.remaining_payable, -20_000);
    assert_eq!(breakdown.emi, -20_000);
    assert_eq!(breakdown.emi, breakdown.remaining_payable);
}

#[test]
fn coupon_without_instructions_serializes_null() {
    let snapshot = BillingSnapshot::new(1).with_coupon(Coupon::new("TEN", 10));
    let value = serde_json::to_value(calculator().calculate(&snapshot)).unwrap();

    assert_eq!(value["coupon"], json!({ "code": "TEN", "discount": 10, "instructions": null }));
    assert_eq!(value["fee"]["payableFee"], 10_000);
}

#[test]
fn payable_without_coupon_is_founders_times_base_fee() {
    for founders in 1..=50u32 {
        let breakdown = calculator().breakdown(&BillingSnapshot::new(founders));
        assert_eq!(breakdown.payable_fee, i64::from(founders) * 100_000);
    }
}

#[test]
fn payable_with_coupon_is_floored_percentage_of_total() {
    for founders in 1..=7u32 {
        for discount in 0..=100u8 {
            let snapshot =
                BillingSnapshot::new(founders).with_coupon(Coupon::new("X", discount));
            let breakdown = calculator().breakdown(&snapshot);
            let total = i64::from(founders) * 100_000;

            assert_eq!(breakdown.payable_fee, total * i64::from(discount) / 100);
            assert!(breakdown.payable_fee <= breakdown.total_fee);
        }
    }
}

#[test]
fn emi_never_exceeds_remaining_or_calculated() {
    for founders in 1..=4u32 {
        for discount in [0u8, 1, 33, 50, 99, 100] {
            for paid in [0i64, 1, 16_666, 49_999, 100_000, 250_000, 500_000] {
                let snapshot = BillingSnapshot::new(founders)
                    .with_paid_fee(paid)
                    .with_coupon(Coupon::new("X", discount));
                let breakdown = calculator().breakdown(&snapshot);

                assert!(breakdown.emi <= breakdown.calculated_emi);
                assert!(breakdown.emi <= breakdown.remaining_payable);
                if breakdown.remaining_payable < 0 {
                    assert_eq!(breakdown.emi, breakdown.remaining_payable);
                }
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let snapshot = BillingSnapshot::new(3)
        .with_paid_fee(12_345)
        .with_coupon(Coupon::new("SEED", 70).with_instructions("Seed cohort"));

    let first = serde_json::to_string(&calculator().calculate(&snapshot)).unwrap();
    let second = serde_json::to_string(&calculator().calculate(&snapshot)).unwrap();
    assert_eq!(first, second);
}
