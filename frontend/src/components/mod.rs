pub mod deep_night_player;
pub mod draw_button;
pub mod fortune_result;

pub use deep_night_player::DeepNightPlayer;
pub use draw_button::DrawButton;
pub use fortune_result::FortuneResult;
