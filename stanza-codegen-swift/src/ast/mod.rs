//! Swift declaration builders.
//!
//! Each builder collects its parts and turns into a [`Code`] value through
//! [`Renderable`](stanza_codegen::Renderable) (or [`FunctionSpec::build`],
//! which can fail). Closing braces are part of the output of every builder;
//! the control flow helpers leave them to the caller so branches can chain.
//!
//! [`Code`]: stanza_codegen::Code

mod control_flow;
mod enums;
mod fns;
mod inits;
mod properties;
mod signature;
mod structs;
mod types;

pub use control_flow::{catch, control_flow, do_, else_, else_if, guard};
pub use enums::{EnumCase, EnumSpec, RawValueCase, RawValueEnumSpec};
pub use fns::{FunctionKeyword, FunctionSpec};
pub use inits::InitializerSpec;
pub use properties::{ComputedPropertySpec, StoredProperty};
pub use structs::TypeSpec;
pub use types::{Access, Argument, DataType};
