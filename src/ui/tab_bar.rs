use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::document::{Document, DocumentId};
use crate::app::messages::Message;

pub const TAB_BAR_HEIGHT: i32 = 30;

const MIN_TAB_WIDTH: i32 = 60;
const MAX_TAB_WIDTH: i32 = 200;
const TAB_H_PADDING: i32 = 10;
const CORNER_RADIUS: i32 = 6;
const TAB_GAP: i32 = 1;
const PLUS_BTN_WIDTH: i32 = 28;
const PLUS_BTN_MARGIN: i32 = 4;

struct TabInfo {
    id: DocumentId,
    title: String,
    is_dirty: bool,
    is_active: bool,
}

#[derive(Clone, Copy)]
struct TabSlot {
    index: usize,
    x: i32,
    width: i32,
}

enum HitResult {
    Tab(usize),
    PlusButton,
    None,
}

struct TabBarState {
    tabs: Vec<TabInfo>,
    layout: Vec<TabSlot>,
    plus_x: i32,
    sender: Sender<Message>,
    widget_w: i32,
}

/// Custom-drawn tab strip. Single click selects a tab, double click starts
/// a rename, the trailing `+` zone creates a new tab.
pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            tabs: Vec::new(),
            layout: Vec::new(),
            plus_x: PLUS_BTN_MARGIN,
            sender,
            widget_w: w,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tab_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tab_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    /// Rebuild the strip from the current documents.
    pub fn rebuild(&mut self, documents: &[Document], active_id: Option<DocumentId>) {
        let mut st = self.state.borrow_mut();
        st.widget_w = self.widget.w();
        st.tabs.clear();
        for doc in documents {
            st.tabs.push(TabInfo {
                id: doc.id,
                title: doc.title.clone(),
                is_dirty: doc.is_dirty(),
                is_active: active_id == Some(doc.id),
            });
        }
        compute_layout(&mut st);
        drop(st);
        self.widget.redraw();
    }
}

// --- Layout computation ---

fn compute_layout(st: &mut TabBarState) {
    st.layout.clear();

    if st.tabs.is_empty() {
        st.plus_x = PLUS_BTN_MARGIN;
        return;
    }

    let tab_count = st.tabs.len() as i32;
    let fixed_width = PLUS_BTN_WIDTH + PLUS_BTN_MARGIN + TAB_GAP * (tab_count - 1);
    let available = st.widget_w - fixed_width;
    let tab_width = (available / tab_count).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);

    let mut cursor_x = 0i32;
    for index in 0..st.tabs.len() {
        st.layout.push(TabSlot {
            index,
            x: cursor_x,
            width: tab_width,
        });
        cursor_x += tab_width + TAB_GAP;
    }
    st.plus_x = cursor_x + PLUS_BTN_MARGIN;
}

// --- Hit-testing ---

fn hit_test_layout(st: &TabBarState, wy: i32, mx: i32, my: i32) -> HitResult {
    if my < wy || my >= wy + TAB_BAR_HEIGHT {
        return HitResult::None;
    }
    for slot in &st.layout {
        if mx >= slot.x && mx < slot.x + slot.width {
            return HitResult::Tab(slot.index);
        }
    }
    if mx >= st.plus_x && mx < st.plus_x + PLUS_BTN_WIDTH {
        return HitResult::PlusButton;
    }
    HitResult::None
}

// --- Colors ---

struct ThemeColors {
    bar_bg: Color,
    active_bg: Color,
    inactive_bg: Color,
    active_text: Color,
    inactive_text: Color,
}

fn theme_colors() -> ThemeColors {
    ThemeColors {
        bar_bg: Color::from_rgb(200, 200, 200),
        active_bg: Color::from_rgb(255, 255, 255),
        inactive_bg: Color::from_rgb(220, 220, 220),
        active_text: Color::from_rgb(0, 0, 0),
        inactive_text: Color::from_rgb(80, 80, 80),
    }
}

// --- Truncation ---

fn truncate_to_fit(text: &str, max_width: i32) -> String {
    if max_width <= 0 {
        return String::new();
    }
    draw::set_font(Font::Helvetica, 12);
    let (tw, _) = draw::measure(text, true);
    if tw <= max_width {
        return text.to_string();
    }

    let ellipsis = "...";
    let (ew, _) = draw::measure(ellipsis, true);
    if ew >= max_width {
        return ellipsis.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    for len in (1..chars.len()).rev() {
        let candidate: String = chars[..len].iter().collect();
        let full = format!("{candidate}{ellipsis}");
        let (fw, _) = draw::measure(&full, true);
        if fw <= max_width {
            return full;
        }
    }
    ellipsis.to_string()
}

// --- Drawing ---

fn draw_rounded_top_rect(x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
    draw::set_draw_color(color);
    draw::draw_rectf(x, y + r, w, h - r);
    draw::draw_rectf(x + r, y, w - 2 * r, r);
    draw::draw_pie(x, y, 2 * r, 2 * r, 90.0, 180.0);
    draw::draw_pie(x + w - 2 * r, y, 2 * r, 2 * r, 0.0, 90.0);
}

fn draw_tab_bar(wid: &Widget, st: &TabBarState) {
    let wx = wid.x();
    let wy = wid.y();
    let ww = wid.w();
    let wh = wid.h();
    let colors = theme_colors();

    // Background
    draw::set_draw_color(colors.bar_bg);
    draw::draw_rectf(wx, wy, ww, wh);

    for slot in &st.layout {
        let tx = wx + slot.x;
        let tab = &st.tabs[slot.index];

        if tab.is_active {
            draw_rounded_top_rect(tx, wy, slot.width, wh, CORNER_RADIUS, colors.active_bg);
        } else {
            draw_rounded_top_rect(tx, wy + 2, slot.width, wh - 2, CORNER_RADIUS, colors.inactive_bg);
        }

        let text_color = if tab.is_active {
            colors.active_text
        } else {
            colors.inactive_text
        };

        let label = if tab.is_dirty {
            format!("\u{25cf} {}", tab.title)
        } else {
            tab.title.clone()
        };

        let text_area_width = slot.width - 2 * TAB_H_PADDING;
        let display_text = truncate_to_fit(&label, text_area_width);

        draw::set_draw_color(text_color);
        draw::set_font(Font::Helvetica, 12);
        draw::draw_text2(
            &display_text,
            tx + TAB_H_PADDING,
            wy,
            text_area_width,
            wh,
            Align::Left | Align::Inside,
        );
    }

    // Plus button
    draw::set_draw_color(colors.inactive_text);
    draw::set_font(Font::HelveticaBold, 16);
    draw::draw_text2(
        "+",
        wx + st.plus_x,
        wy,
        PLUS_BTN_WIDTH,
        wh,
        Align::Center,
    );
}

// --- Event handling ---

fn handle_tab_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();

            match hit_test_layout(&st, wid.y(), mx, my) {
                HitResult::Tab(index) => {
                    let tab_id = st.tabs[index].id;
                    let sender = st.sender;
                    drop(st);
                    if fltk::app::event_clicks() {
                        // Second click of a double click: rename
                        sender.send(Message::TabRename(tab_id));
                    } else {
                        sender.send(Message::TabSwitch(tab_id));
                    }
                    true
                }
                HitResult::PlusButton => {
                    let sender = st.sender;
                    drop(st);
                    sender.send(Message::TabNew);
                    true
                }
                HitResult::None => false,
            }
        }
        _ => false,
    }
}
