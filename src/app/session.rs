//! Frame-stepped presentation loop
use log::{error, info};

use crate::app::state::{Flow, TestState};
use crate::devices::display::{Display, PresentMode};
use crate::devices::framebuffer::DoubleBuffer;
use crate::devices::input::{Buttons, EdgeDetector, InputSource};
use crate::error::Result;
use crate::ui::{draw_welcome_screen, Theme, WelcomeContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Running,
    Terminated,
}

/// Owns the display, the input source and both pixel buffers for the
/// lifetime of a test run.
pub struct Session<'a, D: Display, I: InputSource> {
    display: D,
    input: I,
    buffers: DoubleBuffer,
    edges: EdgeDetector,
    state: TestState,
    stage: Stage,
    content: WelcomeContent<'a>,
    theme: Theme,
}

impl<'a, D: Display, I: InputSource> Session<'a, D, I> {
    /// Allocate both buffers at the display's geometry and bind the front one.
    pub fn new(
        mut display: D,
        input: I,
        content: WelcomeContent<'a>,
        theme: Theme,
    ) -> Result<Self> {
        let info = display.info();
        let buffers = DoubleBuffer::try_new(info.width, info.height, info.stride).map_err(|e| {
            error!("framebuffer setup failed: {}", e);
            e
        })?;
        info!(
            "framebuffers ready: {}x{} (stride {})",
            info.width, info.height, info.stride
        );
        buffers.bind(&mut display);

        Ok(Self {
            display,
            input,
            buffers,
            edges: EdgeDetector::new(),
            state: TestState::new(),
            stage: Stage::Welcome,
            content,
            theme,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn state(&self) -> &TestState {
        &self.state
    }

    pub fn buffers(&self) -> &DoubleBuffer {
        &self.buffers
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn sample(&mut self) -> Buttons {
        let current = self.input.sample();
        self.edges.update(current)
    }

    /// Run one iteration of the loop and return the resulting stage.
    pub fn step(&mut self) -> Stage {
        match self.stage {
            Stage::Welcome => {
                let pressed = self.sample();
                if pressed.intersects(Buttons::CONFIRM) {
                    info!("starting pattern test");
                    self.stage = Stage::Running;
                }
                draw_welcome_screen(self.buffers.back_mut(), &self.content, &self.theme);
                self.buffers.present(&mut self.display);
            }
            Stage::Running => {
                let pressed = self.sample();
                if self.state.apply(pressed) == Flow::Exit {
                    info!("exit requested");
                    self.stage = Stage::Terminated;
                    return self.stage;
                }
                self.state.tick();
                self.state.render(self.buffers.back_mut(), &self.theme);
                self.buffers.present(&mut self.display);
            }
            Stage::Terminated => {}
        }
        self.stage
    }

    /// Step until the user exits, then release everything.
    pub fn run(mut self) -> (D, I) {
        while self.step() != Stage::Terminated {}
        self.shutdown()
    }

    /// Unbind the display and free both buffers, handing the platform
    /// resources back to the caller.
    pub fn shutdown(self) -> (D, I) {
        let Self {
            mut display,
            input,
            buffers,
            ..
        } = self;
        display.set_frame(None, PresentMode::Immediate);
        drop(buffers);
        info!("display released");
        (display, input)
    }
}
