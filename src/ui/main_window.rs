use fltk::{
    app::Sender,
    button::Button,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};
use crate::app::messages::Message;
use crate::app::state::{DEFAULT_FONT, DEFAULT_FONT_SIZE};

const MENU_HEIGHT: i32 = 30;
const TOOLBAR_HEIGHT: i32 = 35;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "TabPad");
    wind.set_xclass("TabPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let toolbar = build_toolbar(sender);
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let tab_bar = TabBar::new(0, MENU_HEIGHT + TOOLBAR_HEIGHT, 800, sender.clone());
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_text_font(DEFAULT_FONT);
    text_editor.set_text_size(DEFAULT_FONT_SIZE);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        menu,
        tab_bar,
        text_editor,
    }
}

/// Toolbar row: styling actions on the left, tab/file actions on the right.
fn build_toolbar(sender: &Sender<Message>) -> Flex {
    let mut toolbar = Flex::new(0, MENU_HEIGHT, 800, TOOLBAR_HEIGHT, None);
    toolbar.set_type(fltk::group::FlexType::Row);
    toolbar.set_margin(2);
    toolbar.set_spacing(4);

    let buttons_left: [(&str, i32, Message); 3] = [
        ("Font Size", 80, Message::ChangeFontSize),
        ("Bold", 55, Message::ToggleBold),
        ("Underline", 80, Message::ToggleUnderline),
    ];
    for (label, width, msg) in buttons_left {
        let mut btn = Button::default().with_label(label);
        btn.set_callback({
            let s = *sender;
            move |_| s.send(msg)
        });
        toolbar.fixed(&btn, width);
    }

    // Expanding spacer pushes the remaining buttons to the right edge
    let _spacer = Frame::default();

    let buttons_right: [(&str, i32, Message); 3] = [
        ("Copy All", 75, Message::CopyAll),
        ("Save", 55, Message::FileSave),
        ("+", 30, Message::TabNew),
    ];
    for (label, width, msg) in buttons_right {
        let mut btn = Button::default().with_label(label);
        btn.set_callback({
            let s = *sender;
            move |_| s.send(msg)
        });
        toolbar.fixed(&btn, width);
    }

    toolbar.end();
    toolbar
}
