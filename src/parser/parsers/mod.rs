//! One format per supported puzzle

pub mod connections;
pub mod framed;
pub mod pips;
pub mod quolture;
pub mod strands;
pub mod waffle;
pub mod wordle;

pub use connections::ConnectionsFormat;
pub use framed::{FramedFormat, FramedOneFrameFormat};
pub use pips::PipsFormat;
pub use quolture::QuoltureFormat;
pub use strands::StrandsFormat;
pub use waffle::WaffleFormat;
pub use wordle::WordleFormat;
