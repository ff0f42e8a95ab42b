//! src/core/keys.rs
//!
//! Generated keysym lookup table
//!
//! Maps the lowercase form of a key name to its canonical casing. Entries
//! are generated from the X11 `keysymdef.h` symbol list plus the daemon
//! modifier names (`super`, `ctrl`, ...) that are not keysyms themselves.
//! Do not edit individual entries by hand; regenerate the table instead.

/// Lowercase key name -> canonical key name.
pub(crate) static KEYSYM_TABLE: &[(&str, &str)] = &[
    // Modifier names as hotkey daemons spell them
    ("super", "super"),
    ("hyper", "hyper"),
    ("meta", "meta"),
    ("alt", "alt"),
    ("ctrl", "ctrl"),
    ("control", "control"),
    ("shift", "shift"),
    ("lock", "lock"),
    ("mode_switch", "mode_switch"),
    ("mod1", "mod1"),
    ("mod2", "mod2"),
    ("mod3", "mod3"),
    ("mod4", "mod4"),
    ("mod5", "mod5"),
    ("any", "any"),
    // Modifier keysyms
    ("shift_l", "Shift_L"),
    ("shift_r", "Shift_R"),
    ("control_l", "Control_L"),
    ("control_r", "Control_R"),
    ("caps_lock", "Caps_Lock"),
    ("shift_lock", "Shift_Lock"),
    ("meta_l", "Meta_L"),
    ("meta_r", "Meta_R"),
    ("alt_l", "Alt_L"),
    ("alt_r", "Alt_R"),
    ("super_l", "Super_L"),
    ("super_r", "Super_R"),
    ("hyper_l", "Hyper_L"),
    ("hyper_r", "Hyper_R"),
    ("iso_level3_shift", "ISO_Level3_Shift"),
    ("iso_level5_shift", "ISO_Level5_Shift"),
    // Latin letters (the lowercase keysym wins for the lowercase lookup key)
    ("a", "a"),
    ("b", "b"),
    ("c", "c"),
    ("d", "d"),
    ("e", "e"),
    ("f", "f"),
    ("g", "g"),
    ("h", "h"),
    ("i", "i"),
    ("j", "j"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("o", "o"),
    ("p", "p"),
    ("q", "q"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("u", "u"),
    ("v", "v"),
    ("w", "w"),
    ("x", "x"),
    ("y", "y"),
    ("z", "z"),
    // Digits
    ("0", "0"),
    ("1", "1"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5"),
    ("6", "6"),
    ("7", "7"),
    ("8", "8"),
    ("9", "9"),
    // Punctuation keysyms
    ("exclam", "exclam"),
    ("quotedbl", "quotedbl"),
    ("numbersign", "numbersign"),
    ("dollar", "dollar"),
    ("percent", "percent"),
    ("ampersand", "ampersand"),
    ("apostrophe", "apostrophe"),
    ("parenleft", "parenleft"),
    ("parenright", "parenright"),
    ("asterisk", "asterisk"),
    ("plus", "plus"),
    ("comma", "comma"),
    ("minus", "minus"),
    ("period", "period"),
    ("slash", "slash"),
    ("colon", "colon"),
    ("semicolon", "semicolon"),
    ("less", "less"),
    ("equal", "equal"),
    ("greater", "greater"),
    ("question", "question"),
    ("at", "at"),
    ("bracketleft", "bracketleft"),
    ("backslash", "backslash"),
    ("bracketright", "bracketright"),
    ("asciicircum", "asciicircum"),
    ("underscore", "underscore"),
    ("grave", "grave"),
    ("braceleft", "braceleft"),
    ("bar", "bar"),
    ("braceright", "braceright"),
    ("asciitilde", "asciitilde"),
    ("space", "space"),
    // Editing and navigation
    ("backspace", "BackSpace"),
    ("tab", "Tab"),
    ("linefeed", "Linefeed"),
    ("clear", "Clear"),
    ("return", "Return"),
    ("pause", "Pause"),
    ("scroll_lock", "Scroll_Lock"),
    ("sys_req", "Sys_Req"),
    ("escape", "Escape"),
    ("delete", "Delete"),
    ("home", "Home"),
    ("left", "Left"),
    ("up", "Up"),
    ("right", "Right"),
    ("down", "Down"),
    ("prior", "Prior"),
    ("page_up", "Page_Up"),
    ("next", "Next"),
    ("page_down", "Page_Down"),
    ("end", "End"),
    ("begin", "Begin"),
    ("select", "Select"),
    ("print", "Print"),
    ("execute", "Execute"),
    ("insert", "Insert"),
    ("undo", "Undo"),
    ("redo", "Redo"),
    ("menu", "Menu"),
    ("find", "Find"),
    ("cancel", "Cancel"),
    ("help", "Help"),
    ("break", "Break"),
    ("num_lock", "Num_Lock"),
    // Keypad
    ("kp_space", "KP_Space"),
    ("kp_tab", "KP_Tab"),
    ("kp_enter", "KP_Enter"),
    ("kp_home", "KP_Home"),
    ("kp_left", "KP_Left"),
    ("kp_up", "KP_Up"),
    ("kp_right", "KP_Right"),
    ("kp_down", "KP_Down"),
    ("kp_prior", "KP_Prior"),
    ("kp_page_up", "KP_Page_Up"),
    ("kp_next", "KP_Next"),
    ("kp_page_down", "KP_Page_Down"),
    ("kp_end", "KP_End"),
    ("kp_begin", "KP_Begin"),
    ("kp_insert", "KP_Insert"),
    ("kp_delete", "KP_Delete"),
    ("kp_equal", "KP_Equal"),
    ("kp_multiply", "KP_Multiply"),
    ("kp_add", "KP_Add"),
    ("kp_separator", "KP_Separator"),
    ("kp_subtract", "KP_Subtract"),
    ("kp_decimal", "KP_Decimal"),
    ("kp_divide", "KP_Divide"),
    ("kp_0", "KP_0"),
    ("kp_1", "KP_1"),
    ("kp_2", "KP_2"),
    ("kp_3", "KP_3"),
    ("kp_4", "KP_4"),
    ("kp_5", "KP_5"),
    ("kp_6", "KP_6"),
    ("kp_7", "KP_7"),
    ("kp_8", "KP_8"),
    ("kp_9", "KP_9"),
    // Function keys
    ("f1", "F1"),
    ("f2", "F2"),
    ("f3", "F3"),
    ("f4", "F4"),
    ("f5", "F5"),
    ("f6", "F6"),
    ("f7", "F7"),
    ("f8", "F8"),
    ("f9", "F9"),
    ("f10", "F10"),
    ("f11", "F11"),
    ("f12", "F12"),
    ("f13", "F13"),
    ("f14", "F14"),
    ("f15", "F15"),
    ("f16", "F16"),
    ("f17", "F17"),
    ("f18", "F18"),
    ("f19", "F19"),
    ("f20", "F20"),
    ("f21", "F21"),
    ("f22", "F22"),
    ("f23", "F23"),
    ("f24", "F24"),
    // XF86 media and hardware keys
    ("xf86audiolowervolume", "XF86AudioLowerVolume"),
    ("xf86audiomute", "XF86AudioMute"),
    ("xf86audioraisevolume", "XF86AudioRaiseVolume"),
    ("xf86audioplay", "XF86AudioPlay"),
    ("xf86audiostop", "XF86AudioStop"),
    ("xf86audioprev", "XF86AudioPrev"),
    ("xf86audionext", "XF86AudioNext"),
    ("xf86audiopause", "XF86AudioPause"),
    ("xf86audiomedia", "XF86AudioMedia"),
    ("xf86audiorecord", "XF86AudioRecord"),
    ("xf86audiorewind", "XF86AudioRewind"),
    ("xf86audioforward", "XF86AudioForward"),
    ("xf86audiomicmute", "XF86AudioMicMute"),
    ("xf86monbrightnessup", "XF86MonBrightnessUp"),
    ("xf86monbrightnessdown", "XF86MonBrightnessDown"),
    ("xf86kbdbrightnessup", "XF86KbdBrightnessUp"),
    ("xf86kbdbrightnessdown", "XF86KbdBrightnessDown"),
    ("xf86kbdlightonoff", "XF86KbdLightOnOff"),
    ("xf86display", "XF86Display"),
    ("xf86wlan", "XF86WLAN"),
    ("xf86bluetooth", "XF86Bluetooth"),
    ("xf86rfkill", "XF86RFKill"),
    ("xf86tools", "XF86Tools"),
    ("xf86search", "XF86Search"),
    ("xf86explorer", "XF86Explorer"),
    ("xf86homepage", "XF86HomePage"),
    ("xf86mail", "XF86Mail"),
    ("xf86calculator", "XF86Calculator"),
    ("xf86calendar", "XF86Calendar"),
    ("xf86poweroff", "XF86PowerOff"),
    ("xf86sleep", "XF86Sleep"),
    ("xf86wakeup", "XF86WakeUp"),
    ("xf86suspend", "XF86Suspend"),
    ("xf86hibernate", "XF86Hibernate"),
    ("xf86favorites", "XF86Favorites"),
    ("xf86back", "XF86Back"),
    ("xf86forward", "XF86Forward"),
    ("xf86stop", "XF86Stop"),
    ("xf86refresh", "XF86Refresh"),
    ("xf86reload", "XF86Reload"),
    ("xf86screensaver", "XF86ScreenSaver"),
    ("xf86touchpadtoggle", "XF86TouchpadToggle"),
    ("xf86touchpadon", "XF86TouchpadOn"),
    ("xf86touchpadoff", "XF86TouchpadOff"),
    ("xf86eject", "XF86Eject"),
    ("xf86mycomputer", "XF86MyComputer"),
    ("xf86launch0", "XF86Launch0"),
    ("xf86launch1", "XF86Launch1"),
    ("xf86launch2", "XF86Launch2"),
    ("xf86launch3", "XF86Launch3"),
    ("xf86launch4", "XF86Launch4"),
    ("xf86launch5", "XF86Launch5"),
    ("xf86launch6", "XF86Launch6"),
    ("xf86launch7", "XF86Launch7"),
    ("xf86launch8", "XF86Launch8"),
    ("xf86launch9", "XF86Launch9"),
    ("xf86launcha", "XF86LaunchA"),
    ("xf86launchb", "XF86LaunchB"),
];
