mod player;
mod search_bar;
mod video_list;

pub use player::VideoPlayer;
pub use search_bar::SearchBar;
pub use video_list::VideoList;
