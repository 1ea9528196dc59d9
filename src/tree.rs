//! The menu graph.
//!
//! A [`MenuTree`] owns every menu in an arena and hands out [`MenuId`]s.
//! It also owns the parent → children relation and the navigation pointers
//! (current menu and the single "back" slot).

use std::collections::HashMap;
use std::fmt;
use std::io;

use tracing::debug;

use crate::config::Config;
use crate::context::DisplayOptions;
use crate::error::{MenuError, MenuResult};
use crate::input::TtyInput;
use crate::menu::{Menu, PromptSource};
use crate::session::Session;

/// Handle to a menu owned by a [`MenuTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(usize);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Forest of menus with one home menu.
#[derive(Debug)]
pub struct MenuTree {
    menus: Vec<Menu>,
    home: MenuId,
    current: MenuId,
    previous: Option<MenuId>,
    submenus: HashMap<MenuId, Vec<MenuId>>,
    display: DisplayOptions,
}

impl MenuTree {
    /// Build a tree around `home` with default settings.
    pub fn new(home: Menu) -> Self {
        Self::with_options(home, DisplayOptions::default())
    }

    /// Build a tree with settings resolved from `config` and the terminal.
    pub fn with_config(home: Menu, config: &Config) -> Self {
        Self::with_options(home, DisplayOptions::new(config))
    }

    pub fn with_options(home: Menu, display: DisplayOptions) -> Self {
        let home_id = MenuId(0);
        Self {
            menus: vec![home],
            home: home_id,
            current: home_id,
            previous: None,
            submenus: HashMap::new(),
            display,
        }
    }

    /// Add a menu to the tree. It is unreachable until linked as a submenu
    /// or jumped to with [`change_menu`](Self::change_menu).
    pub fn insert(&mut self, menu: Menu) -> MenuId {
        self.menus.push(menu);
        MenuId(self.menus.len() - 1)
    }

    pub fn home(&self) -> MenuId {
        self.home
    }

    pub fn current(&self) -> MenuId {
        self.current
    }

    /// Target of the back key
    pub fn previous(&self) -> Option<MenuId> {
        self.previous
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id.0)
    }

    pub fn current_menu(&self) -> &Menu {
        &self.menus[self.current.0]
    }

    pub fn current_menu_mut(&mut self) -> &mut Menu {
        &mut self.menus[self.current.0]
    }

    fn check(&self, id: MenuId) -> MenuResult<()> {
        if id.0 < self.menus.len() {
            Ok(())
        } else {
            Err(MenuError::UnknownMenu(id))
        }
    }

    /// Name of the current menu
    pub fn name(&self) -> &str {
        self.current_menu().name()
    }

    /// Prompt of the current menu, as last shown for dynamic prompts
    pub fn prompt(&self) -> &str {
        self.current_menu().prompt()
    }

    /// Replace the current menu's prompt. Does not redraw; use
    /// [`Session::set_prompt`] while a session is running.
    pub fn set_prompt(&mut self, prompt: impl Into<PromptSource>) {
        self.current_menu_mut().set_prompt(prompt);
    }

    /// Append `child` to `parent`'s submenus.
    pub fn add_submenu(&mut self, parent: MenuId, child: MenuId) -> MenuResult<()> {
        self.add_submenus(parent, [child])
    }

    /// Append several children to `parent`'s submenus, keeping their order.
    pub fn add_submenus(
        &mut self,
        parent: MenuId,
        children: impl IntoIterator<Item = MenuId>,
    ) -> MenuResult<()> {
        self.check(parent)?;
        let children: Vec<MenuId> = children.into_iter().collect();
        for child in &children {
            self.check(*child)?;
        }
        self.submenus.entry(parent).or_default().extend(children);
        Ok(())
    }

    /// Remove the first occurrence of `child` under `parent`.
    /// Returns whether anything was removed.
    pub fn delete_submenu(&mut self, parent: MenuId, child: MenuId) -> bool {
        match self.submenus.get_mut(&parent) {
            Some(children) => match children.iter().position(|c| *c == child) {
                Some(pos) => {
                    children.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Children of `parent`, in display order
    pub fn submenus(&self, parent: MenuId) -> &[MenuId] {
        self.submenus
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `parent` was ever given submenus (even if all were removed)
    pub fn has_submenu_relation(&self, parent: MenuId) -> bool {
        self.submenus.contains_key(&parent)
    }

    pub(crate) fn submenu_names(&self, parent: MenuId) -> Vec<String> {
        self.submenus(parent)
            .iter()
            .filter_map(|id| self.menu(*id))
            .map(|m| m.name().to_string())
            .collect()
    }

    pub(crate) fn previous_name(&self) -> Option<String> {
        self.previous
            .and_then(|id| self.menu(id))
            .map(|m| m.name().to_string())
    }

    /// Number of selectable items in the current menu (options + submenus)
    pub fn item_count(&self) -> usize {
        self.current_menu().option_count() + self.submenus(self.current).len()
    }

    /// Move the current selection up, wrapping to the last item.
    pub fn select_previous(&mut self) {
        let total = self.item_count();
        let menu = self.current_menu_mut();
        if total == 0 {
            menu.selection = 0;
        } else if menu.selection == 0 {
            menu.selection = total - 1;
        } else {
            menu.selection = (menu.selection - 1).min(total - 1);
        }
    }

    /// Move the current selection down, wrapping to the first item.
    pub fn select_next(&mut self) {
        let total = self.item_count();
        let menu = self.current_menu_mut();
        if menu.selection + 1 >= total {
            menu.selection = 0;
        } else {
            menu.selection += 1;
        }
    }

    /// Make `target` the current menu.
    ///
    /// The menu we leave becomes the back target, except when going home,
    /// which clears it. The target's next render starts fresh instead of
    /// erasing. Does not redraw; see [`Session::change_menu`].
    pub fn change_menu(&mut self, target: MenuId) -> MenuResult<()> {
        self.check(target)?;
        self.previous = if target == self.home {
            None
        } else {
            Some(self.current)
        };
        self.current = target;
        self.menus[target.0].last_render_lines = 0;
        debug!(menu = %self.name(), previous = ?self.previous, "changed menu");
        Ok(())
    }

    pub fn display_options(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn display_options_mut(&mut self) -> &mut DisplayOptions {
        &mut self.display
    }

    pub fn redraw(&self) -> bool {
        self.display.redraw
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.display.redraw = redraw;
    }

    /// Run an interactive session on the controlling terminal.
    ///
    /// Blocks until the user exits. Failing to open or read the terminal
    /// ends the session with [`MenuError::Terminal`].
    pub fn display(&mut self) -> MenuResult<()> {
        let input = TtyInput::open().map_err(MenuError::Terminal)?;
        Session::new(self, input, io::stdout()).run()
    }
}
