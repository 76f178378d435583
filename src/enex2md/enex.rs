//! ENEX archive parsing.
//!
//! An `.enex` file is an XML document whose root (`en-export`) holds `note`
//! elements. This module reads one into the owned [`Archive`] model so the
//! rest of the pipeline never touches the XML tree.

use crate::error::Result;
use crate::model::{dedup_tags, Archive, Attachment, Note};
use roxmltree::{Document, Node, ParsingOptions};

pub fn parse_archive(xml: &str) -> Result<Archive> {
    // Exports carry an `<!DOCTYPE en-export SYSTEM ...>` line.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let notes = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("note"))
        .map(parse_note)
        .collect();

    Ok(Archive { notes })
}

fn parse_note(node: Node) -> Note {
    let tags = node
        .children()
        .filter(|n| n.has_tag_name("tag"))
        .filter_map(|n| n.text())
        .map(str::to_string);

    let attachments = node
        .descendants()
        .filter(|n| n.has_tag_name("resource"))
        .map(parse_resource)
        .collect();

    Note {
        title: child_text(node, "title"),
        tags: dedup_tags(tags),
        created: child_text(node, "created"),
        updated: child_text(node, "updated"),
        content: child_text(node, "content"),
        attachments,
    }
}

fn parse_resource(node: Node) -> Attachment {
    let file_name = node
        .children()
        .find(|n| n.has_tag_name("resource-attributes"))
        .and_then(|attrs| child_text(attrs, "file-name"));

    Attachment {
        data: child_text(node, "data"),
        mime: child_text(node, "mime").unwrap_or_else(|| Attachment::DEFAULT_MIME.to_string()),
        file_name,
    }
}

fn child_text(node: Node, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
