//! Helper functions for rule implementations.

use crate::{
    catalog::{Catalog, Context, Message},
    issues::EntryContext,
};

/// Every message of `catalog` outside the `ignore_contexts`, paired with
/// its context.
pub fn checked_messages<'a>(
    catalog: &'a Catalog,
    ignore_contexts: &'a [String],
) -> impl Iterator<Item = (&'a Context, &'a Message)> {
    catalog
        .groups()
        .iter()
        .filter(move |context| !ignore_contexts.iter().any(|name| *name == context.name))
        .flat_map(|context| context.messages.iter().map(move |message| (context, message)))
}

pub fn entry_context(file_path: &str, context: &Context, message: &Message) -> EntryContext {
    EntryContext::new(file_path, message.line, &context.name, &message.source)
}
