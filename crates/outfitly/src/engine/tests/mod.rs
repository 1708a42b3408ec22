mod common;
mod recommender;
mod tips;
