use std::{collections::HashMap, time::Duration};

use macroquad::audio::{self, load_sound_from_bytes, PlaySoundParams, Sound};
use macroquad::prelude::*;
use snake_grid::{
    input, logging, render, Board, CellRng, Clip, Command, Engine, FileScoreStore, Muted, SeededRng,
    Settings, SoundPlayer,
};

struct MacroquadRng;

impl CellRng for MacroquadRng {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        macroquad::rand::gen_range(low, high)
    }
}

struct MacroquadSound {
    clips: HashMap<Clip, Sound>,
    volume: f32,
}

impl MacroquadSound {
    async fn load(volume: f32) -> Self {
        let mut clips = HashMap::new();
        for clip in Clip::ALL {
            match load_sound_from_bytes(&clip.wav_bytes()).await {
                Ok(sound) => {
                    clips.insert(clip, sound);
                }
                Err(err) => tracing::warn!(clip = clip.name(), "could not load sound: {err:?}"),
            }
        }
        Self { clips, volume }
    }
}

impl SoundPlayer for MacroquadSound {
    fn play(&mut self, clip: Clip) {
        let Some(sound) = self.clips.get(&clip) else {
            tracing::warn!(clip = clip.name(), "sound not available, skipping");
            return;
        };
        audio::play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: clip.gain() * self.volume,
            },
        );
    }
}

fn window_conf() -> Conf {
    let board = Board::CLASSIC;
    Conf {
        window_title: "Snake".to_owned(),
        window_width: board.width_px(),
        window_height: board.height_px(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    let settings = Settings::from_env();
    tracing::info!(
        highscore = %settings.highscore_path.display(),
        muted = settings.muted,
        volume = settings.sound_volume,
        "starting"
    );

    let sound: Box<dyn SoundPlayer> = if settings.effective_volume() == 0.0 {
        Box::new(Muted)
    } else {
        Box::new(MacroquadSound::load(settings.effective_volume()).await)
    };
    let rng: Box<dyn CellRng> = match settings.seed {
        Some(seed) => Box::new(SeededRng::new(seed)),
        None => {
            macroquad::rand::srand(macroquad::miniquad::date::now() as u64);
            Box::new(MacroquadRng)
        }
    };
    let store = Box::new(FileScoreStore::new(&settings.highscore_path));

    let mut engine = Engine::new(Board::CLASSIC, store, sound, rng);
    engine.start();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        for command in input::poll_keys() {
            engine.apply(command);
        }
        let mouse: Vec2 = mouse_position().into();
        if is_mouse_button_pressed(MouseButton::Left)
            && render::restart_button_hit(engine.board(), mouse)
        {
            engine.apply(Command::Restart);
        }

        engine.update(Duration::from_secs_f32(get_frame_time().max(0.0)));
        render::draw(&engine.snapshot(), mouse);

        next_frame().await;
    }
}
