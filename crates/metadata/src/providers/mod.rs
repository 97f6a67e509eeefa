mod box_set;
mod episode;
mod episode_images;
mod series_images;

pub use box_set::BoxSetProvider;
pub use episode::EpisodeProvider;
pub use episode_images::EpisodeImageProvider;
pub use series_images::SeriesImageProvider;
