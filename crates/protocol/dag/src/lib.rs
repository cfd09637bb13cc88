#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::ColorParseError;

mod color;
pub use color::{Rgb, normalize};

mod config;
pub use config::{LayoutConfig, RankDir};

mod dag;
pub use dag::{Dag, DagNode};

mod summary;
pub use summary::DagSummary;

mod layout;
pub use layout::{
    LayoutDescriber, PADDING_BOTTOM, PADDING_TOP, RenderEdge, RenderNode, RenderSpec, Shape,
};

mod dot;
pub use dot::Dot;
