pub mod cycle;
pub mod enums;
pub mod sequence;
pub mod serialize;
pub mod shared;
pub mod temporal;
pub mod tree;

pub use cycle::{CycleDetector, ObjectIdentity};
pub use enums::EnumValue;
pub use sequence::SequenceProvider;
pub use serialize::{ParseError, SerializeError, TreeDeserialize, TreeSerialize};
pub use shared::{Shared, same_instance, shared};
pub use temporal::{Date, Time, Timestamp};
pub use tree::{Tree, TreeMap};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        cycle::{CycleDetector, ObjectIdentity},
        enums::EnumValue,
        sequence::SequenceProvider,
        serialize::{ParseError, SerializeError, TreeDeserialize, TreeSerialize},
        shared::{Shared, same_instance, shared},
        temporal::{Date, Time, Timestamp},
        tree::{Tree, TreeMap},
    };
}
