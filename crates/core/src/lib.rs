//! Core business logic for PurchaseFX.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The exchange rate source and purchase storage are reached through traits.
//!
//! # Modules
//!
//! - `currency` - Currency registry, exchange rate resolution, and conversion
//! - `purchase` - Purchase recording and conversion into a target currency

pub mod currency;
pub mod purchase;
