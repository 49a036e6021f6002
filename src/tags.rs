//! One constructor per HTML tag, generated from a single name table.
//!
//! Each function forwards to [`element`] with the tag name bound:
//! `tags::div(attrs, children)` is `element("div", attrs, children)`.

use crate::attrs::Attrs;
use crate::node::{element, Node};

macro_rules! html_tags {
    ($($tag:ident),* $(,)?) => {
        /// Every tag name with a generated constructor, in alphabetical order.
        pub const TAGS: &[&str] = &[$(stringify!($tag)),*];

        $(
            #[doc = concat!("`<", stringify!($tag), ">` element.")]
            pub fn $tag<A, I, C>(attrs: A, children: I) -> Node
            where
                A: Into<Option<Attrs>>,
                I: IntoIterator<Item = C>,
                C: Into<Option<Node>>,
            {
                element(stringify!($tag), attrs, children)
            }
        )*
    };
}

html_tags! {
    a, abbr, acronym, address, area, article, aside, audio, b, base, bdi, bdo,
    big, blockquote, body, br, button, canvas, caption, cite, code, col,
    colgroup, data, datalist, dd, del, details, dfn, dialog, dir, div, dl, dt,
    em, embed, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5,
    h6, head, header, hgroup, hr, html, i, iframe, img, input, ins, kbd, label,
    legend, li, link, main, map, mark, menu, meta, meter, nav, nobr, noembed,
    noframes, noscript, object, ol, optgroup, option, output, p, param, picture,
    pre, progress, q, rb, rp, rt, ruby, s, samp, script, section, select, small,
    source, span, strong, style, sub, summary, sup, table, tbody, td, template,
    textarea, tfoot, th, thead, time, title, tr, track, u, ul, var, video, wbr,
}

/// Whether `tag` has a generated constructor. Informational only;
/// [`element`] accepts any tag string.
pub fn is_known_tag(tag: &str) -> bool {
    TAGS.binary_search(&tag).is_ok()
}
