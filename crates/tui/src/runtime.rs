//! Terminal event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use festdesk_table_api::{TableObserver, TableRecord};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::{App, TableOutcome};

impl<R: TableRecord, O: TableObserver<R>> App<R, O> {
	/// Pump terminal events until the user exits or activates a row.
	pub fn run(&mut self) -> Result<TableOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<TableOutcome> = 'event_loop: loop {
			if let Err(error) = terminal.draw(|frame| self.draw(frame)) {
				break Err(error.into());
			}

			match event_rx.recv_timeout(Duration::from_millis(100)) {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::RecvTimeoutError::Timeout) => continue,
				Err(mpsc::RecvTimeoutError::Disconnected) => {
					break Err(anyhow!("input event channel disconnected"));
				}
			}
			pending_events.extend(event_rx.try_iter());

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					break 'event_loop Ok(outcome);
				}
			}
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
