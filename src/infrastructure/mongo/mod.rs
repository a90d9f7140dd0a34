//! MongoDB access

mod error;
mod source;

pub use error::map_mongo_error;
pub use source::MongoDocumentSource;
