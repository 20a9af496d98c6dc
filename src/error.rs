use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoError>;

#[derive(Error, Debug)]
pub enum PoError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Version control error: {0}")]
    VersionControl(String),
    #[error("Glob error: {0}")]
    Glob(#[from] globset::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for PoError {
    fn from(err: gix::discover::Error) -> Self {
        PoError::GitDiscover(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for PoError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        PoError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for PoError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        PoError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for PoError {
    fn from(err: gix::object::commit::Error) -> Self {
        PoError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for PoError {
    fn from(err: gix::objs::decode::Error) -> Self {
        PoError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for PoError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        PoError::DiffTreeToTree(Box::new(err))
    }
}
