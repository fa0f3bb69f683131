pub mod game_scene;
pub mod roster_scene;
