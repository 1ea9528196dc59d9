//! Interactive navigation loop.
//!
//! A [`Session`] borrows a [`MenuTree`] for the length of one interactive
//! run. It reads keypresses from an [`InputSource`], updates the tree, and
//! draws to any `io::Write`, which lets the whole loop run headless.

use std::io::Write;

use crossterm::{cursor, QueueableCommand};
use tracing::{debug, info, warn};

use crate::error::{MenuError, MenuResult};
use crate::input::{read_command, Command, InputSource};
use crate::menu::{hotkey, PromptSource};
use crate::render::{self, Surroundings};
use crate::theme::{borders, Icon, Theme};
use crate::tree::{MenuId, MenuTree};

const PRESS_ANY_KEY: &str = "(Press any key to continue)";

/// One interactive run over a menu tree.
pub struct Session<'t, I, W> {
    tree: &'t mut MenuTree,
    input: I,
    out: W,
    theme: Theme,
    displaying: bool,
}

impl<'t, I, W> Session<'t, I, W>
where
    I: InputSource,
    W: Write,
{
    pub fn new(tree: &'t mut MenuTree, input: I, out: W) -> Self {
        let theme = tree.display_options().theme();
        Self {
            tree,
            input,
            out,
            theme,
            displaying: false,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        self.tree
    }

    pub fn is_displaying(&self) -> bool {
        self.displaying
    }

    /// Give back the output stream, e.g. to inspect what a headless run
    /// printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user exits.
    ///
    /// The cursor is hidden while the loop runs and shown again on every
    /// way out, including input failures.
    pub fn run(&mut self) -> MenuResult<()> {
        info!(menu = %self.tree.name(), "session started");
        self.displaying = true;
        self.tree.current_menu_mut().selection = 0;

        let result = self.run_loop();
        self.displaying = false;

        let restore = self.restore_cursor();

        match &result {
            Ok(()) => info!("session ended"),
            Err(e) => warn!("session aborted: {}", e),
        }
        result?;
        restore?;
        Ok(())
    }

    fn restore_cursor(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::Show)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn run_loop(&mut self) -> MenuResult<()> {
        let redraw = self.tree.redraw();
        self.tree.set_redraw(false);
        let start = self.start();
        self.tree.set_redraw(redraw);
        start?;

        self.out.queue(cursor::Hide)?;
        self.out.flush()?;

        while self.displaying {
            let command = self.next_command()?;
            self.handle(command)?;
        }
        Ok(())
    }

    /// Welcome screen (if enabled) and the first, never-erasing render
    fn start(&mut self) -> MenuResult<()> {
        if self.tree.display_options().welcome {
            self.welcome()?;
            self.next_command()?;
        }
        self.render()
    }

    fn welcome(&mut self) -> MenuResult<()> {
        let theme = self.theme;
        writeln!(self.out, "Welcome to menutree.")?;
        writeln!(
            self.out,
            "{} to move selection cursor.",
            theme.icon(Icon::UpDown)
        )?;
        writeln!(
            self.out,
            "{}/Enter/H{}tkey to choose.",
            theme.icon(Icon::Choose),
            theme.underline("o")
        )?;
        writeln!(
            self.out,
            "{}/Esc to go back, {} to Exit.",
            theme.icon(Icon::Back),
            theme.underline("x")
        )?;
        writeln!(
            self.out,
            "` (backtick) to toggle redraw (small terminals may scramble)"
        )?;
        writeln!(self.out, "Press any key to start menu...")?;
        self.out.flush()?;
        Ok(())
    }

    fn next_command(&mut self) -> MenuResult<Command> {
        let command = read_command(&mut self.input).map_err(MenuError::Terminal)?;
        debug!(?command, "input");
        Ok(command)
    }

    /// Apply one decoded command.
    pub fn handle(&mut self, command: Command) -> MenuResult<()> {
        match command {
            Command::Up => {
                self.tree.select_previous();
                self.render()
            }
            Command::Down => {
                self.tree.select_next();
                self.render()
            }
            Command::Enter => {
                let index = self.tree.current_menu().selection();
                self.execute(index)
            }
            Command::Back => match self.tree.previous() {
                Some(previous) => self.change_menu(previous),
                None => Ok(()),
            },
            Command::Toggle => self.toggle_redraw(),
            // The exit letter is never a hotkey, so exit always wins.
            Command::Exit => {
                self.displaying = false;
                Ok(())
            }
            Command::Empty => Ok(()),
            Command::Literal(ch) => {
                let key = hotkey::fold(ch);
                match self.tree.current_menu().hotkeys().get(key) {
                    Some(index) => {
                        self.tree.current_menu_mut().selection = index;
                        self.execute(index)
                    }
                    None => Ok(()),
                }
            }
        }
    }

    fn toggle_redraw(&mut self) -> MenuResult<()> {
        if self.tree.redraw() {
            self.tree.set_redraw(false);
            writeln!(self.out, "redraw disabled")?;
            self.render()
        } else {
            // Announce and draw before enabling, so the message survives.
            writeln!(self.out, "redraw enabled")?;
            self.render()?;
            self.tree.set_redraw(true);
            Ok(())
        }
    }

    /// Jump to `target`, redrawing if the session is running.
    ///
    /// Option callbacks get the tree instead (see
    /// [`Menu::add_tree_option`](crate::Menu::add_tree_option)); whatever
    /// they change is drawn once they return.
    pub fn change_menu(&mut self, target: MenuId) -> MenuResult<()> {
        self.tree.change_menu(target)?;
        if self.displaying {
            self.render()?;
        }
        Ok(())
    }

    /// Replace the current menu's prompt, redrawing if the session is
    /// running.
    pub fn set_prompt(&mut self, prompt: impl Into<PromptSource>) -> MenuResult<()> {
        self.tree.set_prompt(prompt);
        if self.displaying {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> MenuResult<()> {
        let current = self.tree.current();
        let submenus = self.tree.submenu_names(current);
        let previous = self.tree.previous_name();
        let redraw = self.tree.redraw();
        let around = Surroundings {
            submenus: &submenus,
            previous: previous.as_deref(),
        };
        render::draw(
            &mut self.out,
            self.tree.current_menu_mut(),
            around,
            &self.theme,
            redraw,
        )?;
        Ok(())
    }

    /// Activate item `index`: run an option or enter a submenu.
    fn execute(&mut self, index: usize) -> MenuResult<()> {
        let option_count = self.tree.current_menu().option_count();
        if index < option_count {
            return self.run_option(index);
        }

        let current = self.tree.current();
        let child = self.tree.submenus(current).get(index - option_count).copied();
        match child {
            Some(child) => self.change_menu(child),
            None if !self.tree.has_submenu_relation(current) => {
                self.recover("Error, menu not found in subMenu map.")
            }
            None => self.recover("Error, submenu not found at that position."),
        }
    }

    fn run_option(&mut self, index: usize) -> MenuResult<()> {
        let redraw = self.tree.redraw();
        let menu = self.tree.current_menu_mut();
        let width = menu.longest_line();
        let name = menu.option_names()[index].clone();
        menu.last_render_lines = 0;

        if redraw {
            // Replace the blank line and footer with the banner.
            render::erase(&mut self.out, 2)?;
        }
        writeln!(
            self.out,
            "{}",
            render::banner(&format!("*** Executing {}... ***", name), borders::FILL, width)
        )?;

        let origin = self.tree.current();
        let Some(mut action) = self.tree.current_menu_mut().take_action(&name) else {
            warn!(option = %name, "no action bound");
            writeln!(self.out, "Error, function not found in Options map.")?;
            writeln!(self.out, "{}", PRESS_ANY_KEY)?;
            self.out.flush()?;
            self.next_command()?;
            return self.render();
        };

        writeln!(
            self.out,
            "{}",
            render::banner("------------- Output -------------", borders::RULE, width)
        )?;
        self.out.flush()?;

        debug!(option = %name, "running action");
        action.invoke(self.tree);
        if let Some(menu) = self.tree.menu_mut(origin) {
            menu.restore_action(&name, action);
        }
        if self.tree.current() != origin {
            debug!(option = %name, menu = %self.tree.name(), "action changed menu");
        }

        writeln!(
            self.out,
            "{}",
            render::banner("-------------- End ---------------", borders::RULE, width)
        )?;
        writeln!(self.out, "{}", PRESS_ANY_KEY)?;
        self.out.flush()?;
        self.next_command()?;
        self.render()
    }

    /// Report a selection that no longer resolves, wait for a key, and
    /// redraw the same menu over the message.
    fn recover(&mut self, message: &str) -> MenuResult<()> {
        warn!(menu = %self.tree.name(), "{}", message);
        writeln!(self.out)?;
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, "{}", PRESS_ANY_KEY)?;
        self.out.flush()?;
        self.tree.current_menu_mut().last_render_lines += 3;
        self.next_command()?;
        self.render()
    }
}
