//! Schema definition: table naming and DDL

mod ddl;
mod naming;

pub use ddl::{apply_schema, create_statements, drop_schema, drop_statements};
pub use naming::TableNames;
