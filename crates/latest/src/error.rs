#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] appticles_api::Error),

    #[error("error fetching posts or categories")]
    InvalidData,

    #[error("load task ended before settling")]
    Closed,
}
