//! Banner demo: rotate notification messages through two terminal regions.
//!
//! Keys 1-3 enqueue sample messages, `m` enqueues a long multi-line one,
//! ESC or `q` exits.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee::{BannerPair, Rect, Rotator, TerminalBanner};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(33);

fn main() -> io::Result<()> {
    let (width, _height) = terminal::size()?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, width);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run<W: Write>(out: &mut W, width: u16) -> io::Result<()> {
    // Two stacked banner regions sharing the top of the screen.
    let banner_width = width.saturating_sub(4).max(20);
    let banners = BannerPair::new(
        TerminalBanner::new(Rect::new(2, 1, banner_width, 5)),
        TerminalBanner::new(Rect::new(2, 7, banner_width, 5)),
    );
    let mut rotator = Rotator::new(banners);

    rotator.show_banner_message("Welcome to the marquee demo");

    loop {
        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Char('1') => rotator.show_banner_message("Build finished"),
                    KeyCode::Char('2') => rotator.show_banner_message("3 new reviews waiting"),
                    KeyCode::Char('3') => rotator.show_banner_message("Deploy rolled back"),
                    KeyCode::Char('m') => rotator.show_banner_message(
                        "A considerably longer notification message that has to wrap \
                         across several lines and still stay inside its banner region",
                    ),
                    _ => {}
                }
            }
        }

        rotator.tick();

        let now = Instant::now();
        for banner in rotator.banners().surfaces() {
            banner.draw(out, now)?;
        }
        out.flush()?;
    }

    Ok(())
}
