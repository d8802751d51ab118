//! Application loop.
//!
//! Owns the landing page, the optional lead-capture modal, the toast
//! overlay and the shared state, and wires them to the terminal event
//! stream and the timer scheduler. Events are routed popup-first: an open
//! modal swallows the keyboard, then the page, then the toast get their
//! chance. Deferred effects (submission latency, toast auto-hide, the
//! post-open focus transfer) are armed here and come back as actions.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    action::{Action, SubmitTarget},
    cli::Cli,
    components::{popups::lead, popups::LeadPopup, toast::ToastOverlay, Component},
    config::Config,
    pages::{LandingPage, Page},
    scheduler::{Scheduler, SchedulerHandle, TimerSlot},
    state::{InputMode, State},
    tui::{Event, EventResponse, Tui},
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    page: LandingPage,
    popup: Option<LeadPopup>,
    toast: ToastOverlay,
    state: State,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(args: Cli, config: Config) -> Result<Self> {
        Ok(Self {
            config,
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
            page: LandingPage::new(),
            popup: None,
            toast: ToastOverlay::new(),
            state: State::new(),
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let (scheduler, scheduler_join) = Scheduler::new(action_tx.clone());

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(event) = tui.next().await {
                match event {
                    Event::Quit => {
                        if self.state.input_mode == InputMode::Normal {
                            action_tx.send(Action::Quit)?;
                        }
                    }
                    Event::Tick => action_tx.send(Action::Tick)?,
                    Event::Render => action_tx.send(Action::Render)?,
                    Event::Resize(w, h) => action_tx.send(Action::Resize(w, h))?,
                    Event::Error => action_tx.send(Action::Error("event stream failed".into()))?,
                    Event::Key(key)
                        if key.code == KeyCode::Char('z')
                            && key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        action_tx.send(Action::Suspend)?;
                    }
                    _ => {
                        if let Some(action) = self.route_event(event)? {
                            action_tx.send(action)?;
                        }
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Quit => {
                        if self.state.input_mode == InputMode::Normal {
                            self.should_quit = true;
                        }
                    }
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => {
                        tui.resize(ratatui::layout::Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui)?;
                    }
                    Action::Render => self.render(&mut tui)?,
                    _ => self.apply(&action, &scheduler, &action_tx)?,
                }
                for followup in self.forward(action)? {
                    action_tx.send(followup)?;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }

        let _ = scheduler.shutdown();
        let _ = scheduler_join.await;
        tui.exit()?;
        Ok(())
    }

    /// Popup-first, then the page, then the toast close key.
    fn route_event(&mut self, event: Event) -> Result<Option<Action>> {
        if let Some(popup) = &mut self.popup {
            if let Some(response) = popup.handle_events(event.clone(), &mut self.state)? {
                return Ok(match response {
                    EventResponse::Continue(action) | EventResponse::Stop(action) => Some(action),
                });
            }
            return Ok(None);
        }
        if let Some(response) = self.page.handle_events(event.clone(), &mut self.state)? {
            return Ok(match response {
                EventResponse::Continue(action) | EventResponse::Stop(action) => Some(action),
            });
        }
        if let Some(response) = self.toast.handle_events(event, &mut self.state)? {
            return Ok(match response {
                EventResponse::Continue(action) | EventResponse::Stop(action) => Some(action),
            });
        }
        Ok(None)
    }

    /// Side effects of an action at the app level: state transitions,
    /// popup lifecycle and timer arming.
    fn apply(
        &mut self,
        action: &Action,
        scheduler: &SchedulerHandle,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match action {
            Action::OpenModal => {
                if self.state.open_modal() {
                    self.popup = Some(LeadPopup::new());
                    scheduler.arm(
                        TimerSlot::ModalFocus,
                        self.config.focus_delay(),
                        Action::FocusFirstInput,
                    )?;
                }
            }
            Action::CloseModal => {
                if self.state.close_modal() {
                    self.popup = None;
                    scheduler.cancel(TimerSlot::ModalFocus)?;
                }
            }
            Action::SubmitStarted(target) => {
                let slot = match target {
                    SubmitTarget::Subscribe => TimerSlot::SubscribeSubmit,
                    SubmitTarget::Lead => TimerSlot::LeadSubmit,
                };
                scheduler.arm(
                    slot,
                    self.config.submit_delay(),
                    Action::SubmitFinished(*target),
                )?;
            }
            Action::SubmitFinished(SubmitTarget::Lead) => {
                // Modal success: toast plus close, in that order.
                action_tx.send(Action::ShowToast(lead::SUCCESS_TOAST.to_string()))?;
                action_tx.send(Action::CloseModal)?;
            }
            Action::ShowToast(_) => {
                scheduler.arm(TimerSlot::ToastHide, self.config.toast_ttl(), Action::HideToast)?;
            }
            Action::SelectDeal(deal) => self.state.select_deal(*deal),
            Action::Error(message) => tracing::error!("{message}"),
            _ => {}
        }
        Ok(())
    }

    /// Give every widget a look at the action; collect follow-ups.
    fn forward(&mut self, action: Action) -> Result<Vec<Action>> {
        let mut followups = Vec::new();
        if let Some(popup) = &mut self.popup {
            if let Some(a) = popup.update(action.clone(), &mut self.state)? {
                followups.push(a);
            }
        }
        if let Some(a) = self.page.update(action.clone(), &mut self.state)? {
            followups.push(a);
        }
        if let Some(a) = self.toast.update(action, &mut self.state)? {
            followups.push(a);
        }
        Ok(followups)
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let mut result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = self.page.draw(frame, area, &self.state) {
                result = Err(e);
                return;
            }
            if let Some(popup) = &mut self.popup {
                if let Err(e) = popup.draw(frame, area, &self.state) {
                    result = Err(e);
                    return;
                }
            }
            if let Err(e) = self.toast.draw(frame, area, &self.state) {
                result = Err(e);
            }
        })?;
        result
    }
}
