pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Edge format error: expected \"node1,node2\", got {input:?}")]
    EdgeFormat { input: String },
}
