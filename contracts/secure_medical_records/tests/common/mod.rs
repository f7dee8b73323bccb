use secure_medical_records::{Role, SecureMedicalRecords, SecureMedicalRecordsClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

pub struct RecordsTest<'a> {
    pub client: SecureMedicalRecordsClient<'a>,
    pub admin: Address,
    pub doctor: Address,
    pub researcher: Address,
    pub patient: Address,
}

/// Deploys the contract and onboards one account per badge. The doctor and
/// researcher start as plain accounts and receive their badge from the admin.
pub fn setup_records(env: &Env) -> RecordsTest<'_> {
    env.mock_all_auths();

    let contract_id = env.register_contract(None, SecureMedicalRecords);
    let client = SecureMedicalRecordsClient::new(env, &contract_id);

    let admin = Address::generate(env);
    let doctor = Address::generate(env);
    let researcher = Address::generate(env);
    let patient = Address::generate(env);

    client.initialize(&admin, &Role::Admin.as_u32());
    client.initialize(&patient, &Role::Patient.as_u32());
    client.initialize(&doctor, &Role::None.as_u32());
    client.initialize(&researcher, &Role::None.as_u32());
    client.assign_badge(&admin, &doctor, &Role::Doctor.as_u32());
    client.assign_badge(&admin, &researcher, &Role::Researcher.as_u32());

    RecordsTest {
        client,
        admin,
        doctor,
        researcher,
        patient,
    }
}
