pub mod sentiment_client;

pub use sentiment_client::{ReviewGateway, SentimentClient};
