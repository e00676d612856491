pub mod derive;
pub mod panel;
pub mod serialization;
pub mod session;
pub mod stability;
pub mod table;

mod traits;

pub use derive::{DerivedElementView, RecordOrigin, derive};
pub use panel::InfoPanel;
pub use session::{AtomSession, ParticleUpdate};
pub use stability::{StabilityInfo, classify_stability};
pub use table::{BaseElementRecord, ElementLookup, ElementTable};
pub use traits::ElementSource;
