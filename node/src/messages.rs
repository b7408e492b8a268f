// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Status text returned to callers of the add/remove operations.
//!
//! External clients match on these strings, so the wording is fixed.

use seeker_kernel::{AddOutcome, KernelError, RemoveOutcome};

pub fn add_message(id: &str, result: &Result<AddOutcome, KernelError>) -> String {
    match result {
        Ok(AddOutcome::Created) => format!("Successfully added metadata for ID: {}", id),
        Ok(AddOutcome::Updated) => format!("Successfully updated metadata for ID: {}", id),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn remove_message(id: &str, result: &Result<RemoveOutcome, KernelError>) -> String {
    match result {
        Ok(RemoveOutcome::Removed) => format!("Successfully removed metadata for ID: {}", id),
        Ok(RemoveOutcome::NotFound) => format!("Error: {}", KernelError::NotFound(id.to_string())),
        Err(e) => format!("Error: {}", e),
    }
}
