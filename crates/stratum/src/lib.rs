//! Stratum: schema-first data-access generation and the object-graph
//! serialization runtime generated classes build on.
//!
//! An external loader builds a [`schema::Schema`]; the generation layer
//! turns each entity into an ordered [`codegen::ClassPlan`] of member/method
//! contributions for an external source emitter; the runtime layer is the
//! contract the emitted classes implement at run time.

pub use stratum_gen as codegen;
pub use stratum_runtime as runtime;
pub use stratum_schema as schema;

///
/// Prelude
///

pub mod prelude {
    pub use stratum_gen::prelude::*;
    pub use stratum_runtime::prelude::*;
    pub use stratum_schema::prelude::*;
}
