mod app;
mod ui;

use fltk::{app as fl_app, enums::Event, prelude::*};

use app::messages::Message;
use app::state::AppState;
use app::style_ops::StyleFlag;
use ui::main_window::build_main_window;
use ui::menu::build_menu;

fn main() {
    env_logger::init();

    let fltk_app = fl_app::App::default();
    let (sender, receiver) = fl_app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    // Route the window close button through the same quit handling as the
    // menu item. The event check keeps Escape from closing the window.
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if fl_app::event() == Event::Close {
                s.send(Message::FileQuit);
            }
        }
    });

    let mut state = AppState::new(
        widgets.text_editor,
        widgets.wind.clone(),
        widgets.tab_bar,
        sender,
    );
    state.rebuild_tab_bar();

    widgets.wind.show();

    // The first tab is requested at startup; cancelling the prompt leaves
    // an empty registry and every action no-ops until a tab exists.
    sender.send(Message::TabNew);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::TabNew => state.tab_new(),
                Message::TabSwitch(id) => state.tab_switch(id),
                Message::TabRename(id) => state.tab_rename(id),

                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit => {
                    if state.request_quit() {
                        fltk_app.quit();
                    }
                }

                Message::EditUndo => state.undo(),
                Message::SelectAll => state.select_all(),
                Message::CopyAll => state.copy_all(),

                Message::ToggleBold => state.toggle_style(StyleFlag::Bold),
                Message::ToggleUnderline => state.toggle_style(StyleFlag::Underline),
                Message::ChangeFontSize => state.change_font_size(),

                Message::ShowAbout => state.show_about(),

                Message::BufferModified(id) => state.buffer_modified(id),
            }
        }
    }
}
