use super::*;
use crate::session::state::Identity;

fn authenticated(role: Role) -> SessionState {
    SessionState::Authenticated {
        identity: Identity {
            id: "cit-0001".to_owned(),
            name: "Asha Rao".to_owned(),
            email: "asha@example.in".to_owned(),
            phone: "9800000001".to_owned(),
            address: "12 MG Road".to_owned(),
            role,
            created_at: 1_700_000_000_000,
        },
        last_active_at: 0,
    }
}

const ROLES: [Role; 3] = [Role::Citizen, Role::Admin, Role::SuperAdmin];

// =============================================================
// Totality: exactly one decision for every input pair
// =============================================================

#[test]
fn every_state_and_requirement_yields_one_decision() {
    let mut states = vec![SessionState::Loading, SessionState::Anonymous];
    states.extend(ROLES.map(authenticated));

    let requirements: Vec<Option<Role>> =
        std::iter::once(None).chain(ROLES.map(Some)).collect();

    for state in &states {
        for requirement in &requirements {
            // A non-exhaustive match would fail to compile; this pins the
            // run-time mapping for each class of input.
            let decision = decide(state, *requirement);
            match state {
                SessionState::Loading => assert_eq!(decision, GateDecision::Pending),
                SessionState::Anonymous => assert_eq!(decision, GateDecision::RedirectToSignIn),
                SessionState::Authenticated { identity, .. } => match requirement {
                    None => assert_eq!(decision, GateDecision::Admit),
                    Some(role) if identity.role == *role => {
                        assert_eq!(decision, GateDecision::Admit);
                    }
                    Some(_) => assert_eq!(decision, GateDecision::RedirectToAccessDenied),
                },
            }
        }
    }
}

// =============================================================
// Specific contracts
// =============================================================

#[test]
fn loading_never_redirects() {
    // No sign-in flash before the storage restore resolves.
    assert_eq!(decide(&SessionState::Loading, None), GateDecision::Pending);
    assert_eq!(
        decide(&SessionState::Loading, Some(Role::Admin)),
        GateDecision::Pending
    );
}

#[test]
fn anonymous_is_sent_to_sign_in_even_for_role_pages() {
    assert_eq!(
        decide(&SessionState::Anonymous, Some(Role::SuperAdmin)),
        GateDecision::RedirectToSignIn
    );
}

#[test]
fn citizen_on_admin_page_is_denied_not_signed_out() {
    assert_eq!(
        decide(&authenticated(Role::Citizen), Some(Role::Admin)),
        GateDecision::RedirectToAccessDenied
    );
}

#[test]
fn role_match_is_exact_with_no_hierarchy() {
    // Admin is not implicitly permitted onto super-admin pages...
    assert_eq!(
        decide(&authenticated(Role::Admin), Some(Role::SuperAdmin)),
        GateDecision::RedirectToAccessDenied
    );
    // ...and super-admin is not implicitly permitted onto admin pages.
    assert_eq!(
        decide(&authenticated(Role::SuperAdmin), Some(Role::Admin)),
        GateDecision::RedirectToAccessDenied
    );
}

#[test]
fn pages_without_a_required_role_admit_any_session() {
    for role in ROLES {
        assert_eq!(decide(&authenticated(role), None), GateDecision::Admit);
    }
}
