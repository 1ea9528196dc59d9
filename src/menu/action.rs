//! Callbacks bound to menu options.

use crate::tree::MenuTree;

/// Something that runs when an option is chosen.
///
/// Any `FnMut()` closure is an action, so most hosts never implement this
/// directly. Callbacks that need to steer the menu (jump elsewhere, change
/// a prompt, add or remove options) wrap an `FnMut(&mut MenuTree)` in
/// [`WithTree`], or use [`Menu::add_tree_option`](super::Menu::add_tree_option).
///
/// Actions run synchronously on the session thread and may write to
/// stdout; their output appears between the menu's own banners. Changes
/// they make to the tree show up in the render that follows.
pub trait Action {
    fn invoke(&mut self, tree: &mut MenuTree);
}

impl<F> Action for F
where
    F: FnMut(),
{
    fn invoke(&mut self, _tree: &mut MenuTree) {
        self()
    }
}

/// Action that receives the running tree.
pub struct WithTree<F>(pub F);

impl<F> Action for WithTree<F>
where
    F: FnMut(&mut MenuTree),
{
    fn invoke(&mut self, tree: &mut MenuTree) {
        (self.0)(tree)
    }
}
