use crate::component::card::ExampleCard;
use crate::config::Config;
use crate::{actions::Action, tui};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};

pub struct RootState {
    pub should_quit: bool,
    pub action_tx: tokio::sync::mpsc::UnboundedSender<Action>,
    pub action_rx: tokio::sync::mpsc::UnboundedReceiver<Action>,

    pub config: Config,
}

impl RootState {
    pub fn new(config: Config) -> Self {
        let (action_tx, action_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            should_quit: false,
            action_tx,
            action_rx,
            config,
        }
    }
}

pub struct App {
    pub card: ExampleCard,
    pub state: RootState,
    pub tui: tui::TuiEnum,
}

impl App {
    pub fn new(state: RootState, tui: tui::TuiEnum) -> Self {
        let card = ExampleCard::new(state.config.card.title.clone());
        Self { card, state, tui }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            let e = self.tui.next().await?;

            self.state.action_tx.send(self.event2action(e))?;

            while let Ok(action) = self.state.action_rx.try_recv() {
                self.perform_action(action);
            }

            // application exit
            if self.state.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Convert a [`tui::Event`] to an [`Action`].
    ///
    /// The card takes no input of its own, so the only key handling that
    /// exists is application-wide: quitting.
    fn event2action(&self, event: tui::Event) -> Action {
        match event {
            tui::Event::Tick => Action::Tick,
            tui::Event::Render => Action::Render,

            tui::Event::Error => Action::Quit,
            tui::Event::Resize(_, _) => Action::Render,

            tui::Event::Key(key) => match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::Quit
                }
                _ => Action::None,
            },

            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => Action::None,
        }
    }

    /// Perform an action.
    ///
    /// This is the only place where application state changes.
    fn perform_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.state.should_quit = true;
            }
            Action::Render => {
                let card = &self.card;
                self.tui
                    .draw(|f| {
                        let area = centered(f.area(), card.desired_size());
                        f.render_widget(card, area);
                    })
                    .unwrap();
            }
            Action::Tick | Action::None => {}
        }
    }
}

/// Center `size` inside `area`. Oversized requests clamp to the area.
fn centered(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(size.width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(size.height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;
    use crate::cli::{ClapSource, Cli};
    use crate::component::card::CAPTION;
    use crate::tui::TestTui;

    fn test_app(title: &str) -> App {
        let args = Cli::parse_from(["example-card", "--title", title]);
        let config = Config::new(Some(ClapSource::new(&args))).unwrap();
        App::new(RootState::new(config), TestTui::new().into())
    }

    fn screen_text(app: &App) -> String {
        let buf = app.tui.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn quit_keys_map_to_quit() {
        let app = test_app("Dashboard");
        assert!(matches!(app.event2action('q'.into()), Action::Quit));

        let ctrl_c = tui::Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(app.event2action(ctrl_c), Action::Quit));

        // plain keys do nothing
        assert!(matches!(app.event2action('x'.into()), Action::None));
    }

    #[test]
    fn resize_triggers_redraw() {
        let app = test_app("Dashboard");
        assert!(matches!(
            app.event2action(tui::Event::Resize(10, 10)),
            Action::Render
        ));
    }

    #[test]
    fn quit_action_sets_flag() {
        let mut app = test_app("Dashboard");
        assert!(!app.state.should_quit);
        app.perform_action(Action::Quit);
        assert!(app.state.should_quit);
    }

    #[test]
    fn render_draws_title_and_caption() {
        let mut app = test_app("Dashboard");
        app.perform_action(Action::Render);
        let screen = screen_text(&app);
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains(CAPTION));
    }

    #[test]
    fn rendering_twice_is_stable() {
        let mut app = test_app("Dashboard");
        app.perform_action(Action::Render);
        let first = screen_text(&app);
        app.perform_action(Action::Render);
        assert_eq!(first, screen_text(&app));
    }

    #[test]
    fn centered_clamps_and_centers() {
        let area = Rect::new(0, 0, 80, 25);
        assert_eq!(
            centered(area, Size::new(40, 7)),
            Rect::new(20, 9, 40, 7)
        );
        // larger than the area: take all of it
        assert_eq!(centered(area, Size::new(200, 50)), area);
    }
}
