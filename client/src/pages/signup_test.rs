use std::cell::RefCell;

use super::*;

#[test]
fn request_login_navigates_to_login_route_once() {
    let visited = RefCell::new(Vec::new());
    request_login(|route| visited.borrow_mut().push(route.to_owned()));
    assert_eq!(*visited.borrow(), vec![LOGIN_ROUTE.to_owned()]);
}

#[test]
fn login_control_label() {
    assert_eq!(LOGIN_LABEL, "Log in navigation");
}
