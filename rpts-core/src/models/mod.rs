pub mod family;
pub mod hit;
pub mod hit_set;

// re-export for cleaner imports
pub use self::family::{Family, FamilyMap};
pub use self::hit::{Hit, Strand};
pub use self::hit_set::HitSet;
