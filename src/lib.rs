pub mod observable;
pub mod ops;
pub mod stream_ext;
pub mod subject;

pub mod prelude {
    pub use crate::observable::observer::*;
    pub use crate::observable::subscription::*;
    pub use crate::observable::teardown::*;
    pub use crate::observable::*;
    pub use crate::stream_ext::*;
    pub use crate::subject::publish_subject::*;
    pub use crate::subject::*;
}
