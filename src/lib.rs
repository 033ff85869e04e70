pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod config;

// Convenience re-exports
pub use error::NetworkError;
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::topology::Topology;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_network, EpochStats, TrainConfig};
pub use config::RunConfig;
