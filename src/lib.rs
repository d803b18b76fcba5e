//! Surebet - betting arbitrage detection across bookmakers.
//!
//! Given quoted odds per outcome from several sources, the detector finds
//! markets where backing every outcome at its best price guarantees a profit,
//! and splits a bankroll so the payout is identical whatever happens.
//!
//! # Architecture
//!
//! - **`domain`** - Quotes, opportunities, legs and identifier newtypes
//! - **`application::detector`** - Grouping, best-price selection, evaluation
//!   and stake allocation
//! - **`port`** - `QuoteSource` and `OpportunityReport` traits
//! - **`adapter`** - JSON/TOML quote files, terminal/JSON reports, the CLI
//! - **`infrastructure`** - Configuration file and logging setup
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surebet::application::detector::{find_surebets, DetectorConfig};
//! use surebet::domain::Quote;
//!
//! let quotes = vec![
//!     Quote::try_new("match-1", "winner", "Home", dec!(2.50), "BookA").unwrap(),
//!     Quote::try_new("match-1", "winner", "Away", dec!(2.10), "BookB").unwrap(),
//! ];
//!
//! let found = find_surebets(&quotes, &DetectorConfig::default());
//! assert_eq!(found.len(), 1);
//! assert!(found[0].edge() > dec!(0.12));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
