//! Pharmacy claim data ingestion.
//!
//! Reads the three source collections the aggregators work on:
//!
//! - **Pharmacies**: `*.csv` files with `npi` and `chain` columns
//! - **Claims**: `*.json` files, each a JSON array of claim objects
//! - **Reverts**: `*.json` files, each a JSON array of revert objects
//!
//! Records are validated on the way in: a claim or revert missing a required
//! field is rejected with [`IngestError::MissingField`] and aborts the load.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rx_ingest::load_input;
//!
//! let snapshot = load_input(Path::new("input_data/unzipped"))?;
//! println!("{} claims", snapshot.claims.len());
//! ```

mod discovery;
mod error;
mod pharmacy;
mod records;
mod snapshot;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{list_csv_files, list_files, list_json_files};

// === Source Readers ===
pub use pharmacy::{read_pharmacies, read_pharmacy_file};
pub use records::{read_claim_file, read_claims, read_revert_file, read_reverts};

// === Input Snapshot ===
pub use snapshot::{CLAIMS_DIR, InputSnapshot, PHARMACIES_DIR, REVERTS_DIR, load_input};
