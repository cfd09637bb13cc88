#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod blob;
pub use blob::{decode_blob, encode_blob};

mod errors;
pub use errors::FieldError;

mod record;
pub use record::{BlockRecord, Snapshot};

mod schema;
pub use schema::RecordSchema;

mod decoder;
pub use decoder::{RecordDecoder, Records, decode_records};
