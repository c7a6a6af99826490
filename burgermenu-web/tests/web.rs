use burgermenu::{
    ElementRole, MenuBinding, MenuConfig, MenuError, MenuHost, Visibility,
};
use burgermenu_web::DomHost;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

struct Markup {
    root: HtmlElement,
    toggle: HtmlElement,
    menu: HtmlElement,
    link: HtmlElement,
    outside: HtmlElement,
}

impl Drop for Markup {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element(tag: &str, class: &str) -> HtmlElement {
    let element = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_class_name(class);
    element
}

// every test gets its own class prefix, the page is shared between tests
fn markup(prefix: &str) -> Markup {
    let root = element("div", &format!("{}-root", prefix));
    let toggle = element("button", &format!("{}-toggle", prefix));
    let menu = element("nav", &format!("{}-menu", prefix));
    let link = element("a", "");
    let outside = element("main", "");
    menu.append_child(&link).unwrap();
    root.append_child(&toggle).unwrap();
    root.append_child(&menu).unwrap();
    root.append_child(&outside).unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    Markup {
        root,
        toggle,
        menu,
        link,
        outside,
    }
}

fn config(prefix: &str, bind_toggle: bool) -> MenuConfig {
    MenuConfig {
        menu_selector: format!(".{}-menu", prefix),
        toggle_selector: format!(".{}-toggle", prefix),
        bind_toggle,
        ..MenuConfig::default()
    }
}

fn display(element: &HtmlElement) -> String {
    element.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn test_toggle_inverts_and_restores() {
    let m = markup("toggle-inverts");
    let host = DomHost::from_window().unwrap();
    let binding =
        MenuBinding::install(host, config("toggle-inverts", false)).unwrap();

    assert_eq!(binding.visibility(), Visibility::Hidden);
    assert_eq!(binding.toggle().unwrap(), Visibility::Visible);
    assert_eq!(display(&m.menu), "flex");
    assert_eq!(binding.toggle().unwrap(), Visibility::Hidden);
    assert_eq!(display(&m.menu), "none");
}

#[wasm_bindgen_test]
fn test_outside_and_inside_clicks() {
    let m = markup("clicks");
    let host = DomHost::from_window().unwrap();
    let _binding = MenuBinding::install(host, config("clicks", false)).unwrap();

    m.menu.style().set_property("display", "flex").unwrap();
    m.link.click();
    m.menu.click();
    assert_eq!(display(&m.menu), "flex");

    m.outside.click();
    assert_eq!(display(&m.menu), "none");
}

#[wasm_bindgen_test]
fn test_toggle_control_click_is_not_dismissed() {
    let m = markup("bound-toggle");
    let host = DomHost::from_window().unwrap();
    let _binding =
        MenuBinding::install(host, config("bound-toggle", true)).unwrap();

    m.toggle.click();
    assert_eq!(display(&m.menu), "flex");
    m.toggle.click();
    assert_eq!(display(&m.menu), "none");
}

#[wasm_bindgen_test]
fn test_teardown_stops_dismissal() {
    let m = markup("teardown");
    let host = DomHost::from_window().unwrap();
    let binding = MenuBinding::install(host, config("teardown", true)).unwrap();
    binding.teardown();

    m.menu.style().set_property("display", "flex").unwrap();
    m.outside.click();
    assert_eq!(display(&m.menu), "flex");
    m.toggle.click();
    assert_eq!(display(&m.menu), "flex");
}

#[wasm_bindgen_test]
fn test_missing_menu() {
    let host = DomHost::from_window().unwrap();
    let config = config("missing", false);
    assert_eq!(
        burgermenu::toggle_menu(&host, &config),
        Err(MenuError::MissingElement {
            role: ElementRole::Menu,
            selector: ".missing-menu".to_string(),
        })
    );
}

#[wasm_bindgen_test]
fn test_host_queries() {
    let m = markup("host");
    let host = DomHost::from_window().unwrap();
    let menu: Node = host.query_selector(".host-menu").unwrap().unwrap();
    let link: &Node = m.link.as_ref();
    let outside: &Node = m.outside.as_ref();

    assert!(host.contains(&menu, link));
    assert!(host.contains(&menu, &menu));
    assert!(!host.contains(&menu, outside));
    assert!(matches!(
        host.query_selector("nav >"),
        Err(MenuError::Selector(_))
    ));
}

#[wasm_bindgen_test]
fn test_exported_functions() {
    let m = markup("exported");
    let json = r#"{"menu_selector": ".exported-menu",
                   "toggle_selector": ".exported-toggle",
                   "log_level": "info"}"#;
    assert!(burgermenu_web::init_menu(Some(json.to_string())).is_ok());
    assert!(burgermenu_web::is_installed());

    assert_eq!(burgermenu_web::toggle(), Ok(Visibility::Visible));
    assert_eq!(burgermenu_web::visibility(), Ok(Visibility::Visible));
    m.outside.click();
    assert_eq!(burgermenu_web::visibility(), Ok(Visibility::Hidden));

    // re-initializing replaces the binding instead of stacking listeners
    assert!(burgermenu_web::init_menu(Some(json.to_string())).is_ok());
    assert!(matches!(burgermenu_web::toggle_menu(), Ok(true)));
    assert!(burgermenu_web::close_menu().is_ok());
    assert_eq!(display(&m.menu), "none");
    assert!(burgermenu_web::init_menu(Some("{".to_string())).is_err());

    assert!(burgermenu_web::teardown_menu());
    assert!(!burgermenu_web::teardown_menu());
    assert_eq!(burgermenu_web::close(), Err(MenuError::NotInstalled));
    // no binding and no `.burger-menu` on the page
    assert!(burgermenu_web::toggle().is_err());
}

#[wasm_bindgen_test]
fn test_start_enables_logging() {
    burgermenu_web::start();
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
}

#[wasm_bindgen_test]
fn test_failed_reinstall_keeps_binding() {
    let m = markup("reinstall");
    burgermenu_web::install(config("reinstall", false)).unwrap();

    let missing = MenuConfig {
        menu_selector: ".reinstall-nowhere".to_string(),
        ..config("reinstall", false)
    };
    assert_eq!(
        burgermenu_web::install(missing),
        Err(MenuError::MissingElement {
            role: ElementRole::Menu,
            selector: ".reinstall-nowhere".to_string(),
        })
    );
    assert!(burgermenu_web::is_installed());

    m.menu.style().set_property("display", "flex").unwrap();
    m.outside.click();
    assert_eq!(display(&m.menu), "none");

    assert!(burgermenu_web::uninstall());
}
