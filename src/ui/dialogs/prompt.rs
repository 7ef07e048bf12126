use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    dialog,
    enums::CallbackTrigger,
    frame::Frame,
    input::{Input, IntInput},
    prelude::*,
    window::Window,
};

use super::run_dialog;

/// Modal string prompt. Returns the entered text on OK (possibly empty,
/// callers treat empty as cancellation) or None when dismissed.
pub fn prompt_string(title: &str, label: &str, initial: &str) -> Option<String> {
    let mut dialog_win = Window::default()
        .with_size(280, 120)
        .with_label(title)
        .center_screen();
    dialog_win.make_modal(true);

    Frame::default()
        .with_pos(20, 15)
        .with_size(240, 25)
        .with_label(label);
    let mut input = Input::default().with_pos(20, 45).with_size(240, 28);
    input.set_value(initial);

    let mut ok_btn = Button::default()
        .with_pos(60, 82)
        .with_size(75, 28)
        .with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(145, 82)
        .with_size(75, 28)
        .with_label("Cancel");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let result: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let input_ok = input.clone();
    let dialog_ok = dialog_win.clone();
    ok_btn.set_callback(move |_| {
        *result_ok.borrow_mut() = Some(input_ok.value());
        dialog_ok.clone().hide();
    });

    // Enter key on input triggers OK
    let mut ok_btn2 = ok_btn.clone();
    input.set_trigger(CallbackTrigger::EnterKey);
    input.set_callback(move |_| {
        ok_btn2.do_callback();
    });

    let dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    run_dialog(&dialog_win);

    let value = result.borrow_mut().take();
    value
}

/// Modal integer prompt for a font size. Invalid input keeps the dialog
/// open; cancelling returns None.
pub fn prompt_font_size() -> Option<i32> {
    let mut dialog_win = Window::default()
        .with_size(280, 120)
        .with_label("Font Size")
        .center_screen();
    dialog_win.make_modal(true);

    Frame::default()
        .with_pos(20, 15)
        .with_size(240, 25)
        .with_label("Enter new font size:");
    let mut size_input = IntInput::default().with_pos(20, 45).with_size(240, 28);

    let mut ok_btn = Button::default()
        .with_pos(60, 82)
        .with_size(75, 28)
        .with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(145, 82)
        .with_size(75, 28)
        .with_label("Cancel");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let result: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let size_input_ok = size_input.clone();
    let dialog_ok = dialog_win.clone();
    ok_btn.set_callback(move |_| {
        match size_input_ok.value().trim().parse::<i32>() {
            Ok(size) if size > 0 => {
                *result_ok.borrow_mut() = Some(size);
                dialog_ok.clone().hide();
            }
            _ => dialog::message_default("Please enter a valid font size"),
        }
    });

    let mut ok_btn2 = ok_btn.clone();
    size_input.set_trigger(CallbackTrigger::EnterKey);
    size_input.set_callback(move |_| {
        ok_btn2.do_callback();
    });

    let dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    run_dialog(&dialog_win);

    let value = result.borrow_mut().take();
    value
}
