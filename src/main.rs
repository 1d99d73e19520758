use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use temple_carousel::core::Command;
use temple_carousel::kernel::services::adapters::{
    carousel_options, resolve_settings, AppMessage, AsyncRuntime,
};
use temple_carousel::kernel::services::apply_effects;
use temple_carousel::kernel::{Action, CarouselState, Store};
use temple_carousel::tui::crossterm::into_input_event;
use temple_carousel::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use temple_carousel::ui::backend::terminal::RatatuiTerminal;
use temple_carousel::ui::core::painter::Painter;
use temple_carousel::ui::core::theme::Theme;
use temple_carousel::views::{Card, CarouselView};

mod logging;

const INPUT_POLL: Duration = Duration::from_millis(50);

fn dispatch(store: &mut Store, runtime: &mut AsyncRuntime, action: Action) -> bool {
    let result = store.dispatch(action);
    apply_effects(&result.effects, runtime);
    result.state_changed
}

fn main() -> io::Result<()> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let logging = logging::init();

    let settings = resolve_settings(settings_path.as_deref());
    let options = carousel_options(&settings);
    let cards: Vec<Card> = settings.items.iter().map(Card::from).collect();
    let theme = Theme::from_settings(&settings.theme);

    let mut store = Store::new(CarouselState::new(cards.len(), options));
    let (msg_tx, msg_rx) = mpsc::channel::<AppMessage>();
    let mut runtime = AsyncRuntime::new(msg_tx)?;

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals =
        temple_carousel::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut view = CarouselView::new();
    let mut painter = Painter::new();

    let init = store.initialize();
    apply_effects(&init.effects, &mut runtime);
    tracing::info!(
        items = cards.len(),
        log_dir = ?logging.as_ref().map(|l| l.log_dir().to_path_buf()),
        "carousel started"
    );

    let mut dirty = true;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "shutting down");
            break;
        }

        while let Ok(msg) = msg_rx.try_recv() {
            match msg {
                AppMessage::AutoplayTick { generation } => {
                    dirty |= dispatch(&mut store, &mut runtime, Action::AutoplayTick { generation });
                }
            }
        }

        if dirty {
            terminal.draw(|backend, area| {
                painter.clear();
                view.paint(&mut painter, area, store.state(), &cards, &theme);
                backend.draw(area, painter.cmds());
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(INPUT_POLL)? {
            continue;
        }
        let event = into_input_event(crossterm::event::read()?);
        match view.handle_input(&event) {
            Some(Command::Quit) => break,
            Some(Command::Carousel(action)) => {
                dirty |= dispatch(&mut store, &mut runtime, action);
            }
            None => {}
        }
    }

    drop(runtime);
    drop(guard);
    tracing::info!("carousel exited");
    Ok(())
}
