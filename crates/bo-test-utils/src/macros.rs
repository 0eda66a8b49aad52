// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Assertions that record themselves in a [`TestLogger`](crate::TestLogger)

/// Assert `condition`, logging the attempt and its outcome
#[macro_export]
macro_rules! logged_assert {
    ($logger:expr, $condition:expr) => {
        $crate::logged_assert!($logger, $condition, stringify!($condition))
    };
    ($logger:expr, $condition:expr, $message:expr) => {
        if let Err(e) = $logger.log(&format!("Asserting: {}", $message)) {
            eprintln!("Warning: Failed to write to test log: {}", e);
        }

        if $condition {
            if let Err(e) = $logger.log("✓ Assertion passed") {
                eprintln!("Warning: Failed to write to test log: {}", e);
            }
        } else {
            if let Err(e) = $logger.log("✗ Assertion failed") {
                eprintln!("Warning: Failed to write to test log: {}", e);
            }
            panic!("Assertion failed: {}", $message);
        }
    };
}

/// Assert `left == right`, logging both expressions
#[macro_export]
macro_rules! logged_assert_eq {
    ($logger:expr, $left:expr, $right:expr) => {{
        let left = &$left;
        let right = &$right;
        if let Err(e) = $logger.log(&format!(
            "Asserting equality: {} == {}",
            stringify!($left),
            stringify!($right)
        )) {
            eprintln!("Warning: Failed to write to test log: {}", e);
        }

        if left == right {
            if let Err(e) = $logger.log("✓ Equality assertion passed") {
                eprintln!("Warning: Failed to write to test log: {}", e);
            }
        } else {
            let message = format!(
                "assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                left, right
            );
            if let Err(e) = $logger.log(&format!("✗ Equality assertion failed: {}", message)) {
                eprintln!("Warning: Failed to write to test log: {}", e);
            }
            panic!("{}", message);
        }
    }};
}
