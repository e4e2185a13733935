//! Data context the preview binds against.
//!
//! A scope is a chain of frames. The root frame is the editor's sample data;
//! every ForEach iteration pushes one binding on top of its parent without
//! copying it, so sibling iterations never observe each other.

use stackblocks_model::Value;

#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    frame: Frame<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    Root(&'a Value),
    Binding {
        parent: &'a Scope<'a>,
        name: &'a str,
        value: &'a Value,
    },
}

impl<'a> Scope<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            frame: Frame::Root(root),
        }
    }

    /// Child scope with one extra binding; parent keys stay visible
    pub fn extend<'b>(&'b self, name: &'b str, value: &'b Value) -> Scope<'b>
    where
        'a: 'b,
    {
        Scope {
            frame: Frame::Binding {
                parent: self,
                name,
                value,
            },
        }
    }

    /// Top-level key, innermost binding first
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self.frame {
            Frame::Root(root) => root.as_object().and_then(|map| map.get(key)),
            Frame::Binding {
                parent,
                name,
                value,
            } => {
                if name == key {
                    Some(value)
                } else {
                    parent.get(key)
                }
            }
        }
    }

    /// Resolve a dotted path such as `$0.author.name` or `items.0`
    pub fn lookup(&self, path: &str) -> Option<&'a Value> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.get(first)?, |value, segment| value.get(segment))
    }
}
