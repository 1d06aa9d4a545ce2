mod cors;
mod misc;

pub use {
    cors::Cors,
    misc::{ApiResult, ErrorBody, LenientId}
};
