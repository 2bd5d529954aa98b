//! # Pump Records
//!
//! Input boundary and in-memory model for the pumps being compared.
//!
//! - [`PumpSpec`]: what the user enters (optional minimums, optional color)
//! - [`PumpRecord`]: a validated pump with a fresh [`PumpId`] and an assigned [`Color`]
//! - [`PumpCollection`]: the ordered, caller-owned set of records
//!
//! ## Pump Files
//!
//! ```toml
//! [[pump]]
//! name = "1/3 cv"
//! max_height = 10.0
//! max_flow = 5000.0
//!
//! [[pump]]
//! name = "1/2 cv"
//! maxHeight = 14.0
//! maxFlow = 7000.0
//! minHeight = 2.0
//! color = "#3498db"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pumpcurve::pump::{PumpCollection, PumpSpec};
//!
//! let mut pumps = PumpCollection::new();
//! let id = pumps.add(&PumpSpec::new("1/3 cv", 10.0, 5000.0))?.id();
//! assert_eq!(pumps.len(), 1);
//!
//! pumps.remove(id);
//! assert!(pumps.is_empty());
//! # Ok::<(), pumpcurve::pump::PumpError>(())
//! ```

mod collection;
mod color;
mod error;
mod input;
mod record;


pub use collection::PumpCollection;
pub use color::{Color, Palette, DEFAULT_PALETTE};
pub use error::PumpError;
pub use input::{load_pumps, parse_pumps, PumpFileFormat};
pub use record::{Envelope, PumpId, PumpRecord, PumpSpec};
