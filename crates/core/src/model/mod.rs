pub mod call_path;
pub mod method;
pub mod profile;

pub use call_path::{CallPath, PATH_DELIMITER, ROOT_KEY};
pub use method::{CallEdge, EdgeId, MethodId, MethodRecord};
pub use profile::{ProfileData, ProfileMetadata, ThreadRecord};
