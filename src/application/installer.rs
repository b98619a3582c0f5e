//! Installer Controller
//!
//! State machine behind the parody installer screen:
//!
//! ```text
//! agree -> install: progress +1 every 20ms -> 100% -> fire (10s) -> idle
//! panic sell -> BSOD -> restart: progress +2 every 50ms -> 100% -> 500ms -> reset
//! ```
//!
//! Progress timers are owned [`TimerHandle`]s; starting a sequence replaces
//! any timer already running for it and [`InstallerController::shutdown`]
//! cancels everything.

use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::time::{interval_at, Instant};

use super::timer::TimerHandle;

pub const TWITTER_URL: &str = "https://x.com/cr4shbags";
pub const TELEGRAM_URL: &str = "https://t.me/cr4shbags";
pub const TOKEN_PAGE_URL: &str = "https://bags.fm/6LWpReZZo75qpvH8465C7vXZrBSUuNMFJ6iEwKo2BAGS";

/// Tick periods and steps of the fake progress bars
#[derive(Debug, Clone)]
pub struct InstallerTimings {
    pub install_tick: Duration,
    pub install_step: u32,
    pub fire_duration: Duration,
    pub restart_tick: Duration,
    pub restart_step: u32,
    pub restart_settle: Duration,
}

impl Default for InstallerTimings {
    fn default() -> Self {
        Self {
            install_tick: Duration::from_millis(20),
            install_step: 1,
            fire_duration: Duration::from_secs(10),
            restart_tick: Duration::from_millis(50),
            restart_step: 2,
            restart_settle: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The draggable "about" notepad window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotepadWindow {
    pub visible: bool,
    pub position: Point,
    pub dragging: bool,
    drag_offset: Point,
}

impl Default for NotepadWindow {
    fn default() -> Self {
        Self {
            visible: false,
            position: Point::new(600.0, 200.0),
            dragging: false,
            drag_offset: Point::default(),
        }
    }
}

impl NotepadWindow {
    /// Grab the window at `pointer`; `origin` is the window's top-left corner
    pub fn begin_drag(&mut self, pointer: Point, origin: Point) {
        self.dragging = true;
        self.drag_offset = Point::new(pointer.x - origin.x, pointer.y - origin.y);
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if self.dragging {
            self.position = Point::new(pointer.x - self.drag_offset.x, pointer.y - self.drag_offset.y);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InstallerState {
    pub agreed: bool,
    pub is_installing: bool,
    pub install_progress: u32,
    pub show_fire: bool,
    pub show_bsod: bool,
    pub show_restart: bool,
    pub restart_progress: u32,
    pub notepad: NotepadWindow,
}

impl InstallerState {
    /// Return to the freshly loaded installer, keeping the notepad as is
    fn reset(&mut self) {
        self.show_restart = false;
        self.agreed = false;
        self.show_fire = false;
        self.is_installing = false;
        self.install_progress = 0;
    }
}

pub struct InstallerController {
    state: Arc<RwLock<InstallerState>>,
    timings: InstallerTimings,
    install_timer: Mutex<Option<TimerHandle>>,
    restart_timer: Mutex<Option<TimerHandle>>,
}

impl InstallerController {
    pub fn new() -> Self {
        Self::with_timings(InstallerTimings::default())
    }

    pub fn with_timings(timings: InstallerTimings) -> Self {
        Self {
            state: Arc::new(RwLock::new(InstallerState::default())),
            timings,
            install_timer: Mutex::new(None),
            restart_timer: Mutex::new(None),
        }
    }

    pub async fn state(&self) -> InstallerState {
        self.state.read().await.clone()
    }

    pub async fn agree(&self, agreed: bool) {
        self.state.write().await.agreed = agreed;
    }

    /// Start the install progress bar. Returns false without the agreement.
    pub async fn install(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if !state.agreed {
                tracing::debug!("Install refused: license not accepted");
                return false;
            }
            state.is_installing = true;
            state.install_progress = 0;
        }

        let state = Arc::clone(&self.state);
        let timings = self.timings.clone();
        let timer = TimerHandle::spawn("install", async move {
            run_progress(&state, timings.install_tick, timings.install_step, install_progress).await;
            state.write().await.show_fire = true;
            tracing::info!("Install complete, screen on fire");

            tokio::time::sleep(timings.fire_duration).await;
            let mut state = state.write().await;
            state.show_fire = false;
            state.is_installing = false;
            state.install_progress = 0;
        });

        *self.install_timer.lock().await = Some(timer);
        true
    }

    pub async fn panic_sell(&self) {
        self.state.write().await.show_bsod = true;
        tracing::warn!("Panic sell: blue screen");
    }

    /// Leave the BSOD and run the restart progress bar, then reset
    pub async fn restart(&self) {
        if let Some(mut timer) = self.install_timer.lock().await.take() {
            timer.cancel();
        }
        {
            let mut state = self.state.write().await;
            state.show_bsod = false;
            state.show_restart = true;
            state.restart_progress = 0;
        }

        let state = Arc::clone(&self.state);
        let timings = self.timings.clone();
        let timer = TimerHandle::spawn("restart", async move {
            run_progress(&state, timings.restart_tick, timings.restart_step, restart_progress).await;
            tokio::time::sleep(timings.restart_settle).await;
            state.write().await.reset();
            tracing::info!("Restart complete");
        });

        *self.restart_timer.lock().await = Some(timer);
    }

    pub async fn open_about(&self) {
        self.state.write().await.notepad.visible = true;
    }

    pub async fn close_about(&self) {
        let mut state = self.state.write().await;
        state.notepad.visible = false;
        state.notepad.end_drag();
    }

    pub async fn begin_drag(&self, pointer: Point, origin: Point) {
        self.state.write().await.notepad.begin_drag(pointer, origin);
    }

    pub async fn drag_to(&self, pointer: Point) {
        self.state.write().await.notepad.drag_to(pointer);
    }

    pub async fn end_drag(&self) {
        self.state.write().await.notepad.end_drag();
    }

    /// Cancel all running timers
    pub async fn shutdown(&self) {
        for slot in [&self.install_timer, &self.restart_timer] {
            if let Some(mut timer) = slot.lock().await.take() {
                timer.cancel();
            }
        }
    }
}

impl Default for InstallerController {
    fn default() -> Self {
        Self::new()
    }
}

fn install_progress(state: &mut InstallerState) -> &mut u32 {
    &mut state.install_progress
}

fn restart_progress(state: &mut InstallerState) -> &mut u32 {
    &mut state.restart_progress
}

/// Advance a progress field by `step` every `tick` until a tick sees 100
async fn run_progress(
    state: &RwLock<InstallerState>,
    tick: Duration,
    step: u32,
    field: fn(&mut InstallerState) -> &mut u32,
) {
    let mut ticker = interval_at(Instant::now() + tick, tick);
    loop {
        ticker.tick().await;
        let mut guard = state.write().await;
        let progress = field(&mut *guard);
        if *progress >= 100 {
            *progress = 100;
            return;
        }
        *progress += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_install_requires_agreement() {
        let installer = InstallerController::new();
        assert!(!installer.install().await);
        assert!(!installer.state().await.is_installing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_install_sequence() {
        let installer = InstallerController::new();
        installer.agree(true).await;
        assert!(installer.install().await);

        tokio::time::sleep(Duration::from_millis(1_010)).await;
        let state = installer.state().await;
        assert!(state.is_installing);
        assert!((45..=55).contains(&state.install_progress), "{}", state.install_progress);
        assert!(!state.show_fire);

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        let state = installer.state().await;
        assert_eq!(state.install_progress, 100);
        assert!(state.show_fire);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = installer.state().await;
        assert!(!state.show_fire);
        assert!(!state.is_installing);
        assert_eq!(state.install_progress, 0);
        assert!(state.agreed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bsod_and_restart_resets() {
        let installer = InstallerController::new();
        installer.agree(true).await;
        installer.install().await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        installer.panic_sell().await;
        assert!(installer.state().await.show_bsod);

        installer.restart().await;
        let state = installer.state().await;
        assert!(!state.show_bsod);
        assert!(state.show_restart);

        tokio::time::sleep(Duration::from_millis(1_275)).await;
        let state = installer.state().await;
        assert_eq!(state.restart_progress, 50);
        // install timer was cancelled by the restart
        let frozen = state.install_progress;
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(installer.state().await.install_progress, frozen);

        tokio::time::sleep(Duration::from_secs(3)).await;
        let state = installer.state().await;
        assert!(!state.show_restart);
        assert!(!state.agreed);
        assert!(!state.is_installing);
        assert_eq!(state.install_progress, 0);
        assert_eq!(state.restart_progress, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_progress() {
        let installer = InstallerController::new();
        installer.agree(true).await;
        installer.install().await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        installer.shutdown().await;
        let frozen = installer.state().await.install_progress;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(installer.state().await.install_progress, frozen);
    }

    #[tokio::test]
    async fn test_notepad_drag() {
        let installer = InstallerController::new();
        installer.open_about().await;
        assert_eq!(installer.state().await.notepad.position, Point::new(600.0, 200.0));

        installer.begin_drag(Point::new(610.0, 215.0), Point::new(600.0, 200.0)).await;
        installer.drag_to(Point::new(110.0, 65.0)).await;
        installer.end_drag().await;
        installer.drag_to(Point::new(999.0, 999.0)).await;

        let notepad = installer.state().await.notepad;
        assert!(notepad.visible);
        assert!(!notepad.dragging);
        assert_eq!(notepad.position, Point::new(100.0, 50.0));

        installer.close_about().await;
        assert!(!installer.state().await.notepad.visible);
    }
}
