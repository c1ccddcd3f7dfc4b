fn main() {
    multiversx_sc_meta_lib::cli_main::<investment_dao::AbiProvider>();
}
