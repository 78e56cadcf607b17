//! Swift source templates for the stanza fragment renderer.
//!
//! Builders in [`ast`] produce [`Code`](stanza_codegen::Code) trees for Swift
//! declarations; [`SwiftFile`] assembles them into a file with the
//! generated-code banner.

mod helpers;
mod swift_file;

pub mod ast;

pub use ast::{
    Access, Argument, ComputedPropertySpec, DataType, EnumCase, EnumSpec, FunctionKeyword,
    FunctionSpec, InitializerSpec, RawValueCase, RawValueEnumSpec, StoredProperty, TypeSpec,
    catch, control_flow, do_, else_, else_if, guard,
};
pub use helpers::{end, line_break, raw, statement};
pub use swift_file::SwiftFile;
