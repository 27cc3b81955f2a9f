#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use ortb_describe as describe;
pub use ortb_mapper as mapper;
pub use ortb_model as model;
pub use ortb_utils as utils;
