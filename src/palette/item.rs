use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// State threaded through item hooks.
///
/// `selected` is the selection history, most recent first. It stays `None`
/// until the palette is first opened with this context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context<T> {
    pub selected: Option<Vec<ItemId>>,
    pub data: T,
}

impl<T> Context<T> {
    pub fn new(data: T) -> Self {
        Self {
            selected: None,
            data,
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: Vec<ItemId>) -> Self {
        self.selected = Some(history);
        self
    }

    /// The history as a slice, empty when none was ever recorded.
    #[must_use]
    pub fn history(&self) -> &[ItemId] {
        self.selected.as_deref().unwrap_or(&[])
    }
}

/// Behaviour attached to an item.
///
/// An item carrying an action is selectable; `on_focus` is optional.
pub trait ItemAction<T> {
    fn on_focus(&self, _ctx: &mut Context<T>, _item: &Item<T>) {}

    fn on_select(&self, ctx: &mut Context<T>, item: &Item<T>);
}

/// Adapts a closure into an [`ItemAction`] that only reacts to selection.
pub struct SelectFn<F>(pub F);

impl<T, F> ItemAction<T> for SelectFn<F>
where
    F: Fn(&mut Context<T>, &Item<T>),
{
    fn on_select(&self, ctx: &mut Context<T>, item: &Item<T>) {
        (self.0)(ctx, item);
    }
}

pub struct Item<T> {
    pub id: ItemId,
    pub label: String,
    pub help: String,
    pub action: Option<Rc<dyn ItemAction<T>>>,
}

impl<T> Item<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            help: String::new(),
            action: None,
        }
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl ItemAction<T> + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    #[must_use]
    pub fn on_select<F>(self, f: F) -> Self
    where
        F: Fn(&mut Context<T>, &Item<T>) + 'static,
        T: 'static,
    {
        self.action(SelectFn(f))
    }
}

impl<T> Clone for Item<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            help: self.help.clone(),
            action: self.action.clone(),
        }
    }
}

impl<T> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("help", &self.help)
            .field("action", &self.action.is_some())
            .finish()
    }
}
