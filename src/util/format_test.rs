use super::*;

// =============================================================
// formatar_valor
// =============================================================

#[test]
fn valor_com_centavos() {
    assert_eq!(formatar_valor(1500.5), "R$ 1.500,50");
}

#[test]
fn valor_zero() {
    assert_eq!(formatar_valor(0.0), "R$ 0,00");
}

#[test]
fn valor_sem_agrupamento() {
    assert_eq!(formatar_valor(999.99), "R$ 999,99");
}

#[test]
fn valor_com_dois_grupos() {
    assert_eq!(formatar_valor(1_234_567.89), "R$ 1.234.567,89");
}

#[test]
fn valor_negativo() {
    assert_eq!(formatar_valor(-25.0), "-R$ 25,00");
}

#[test]
fn valor_arredonda_ao_centavo() {
    assert_eq!(formatar_valor(10.004), "R$ 10,00");
    assert_eq!(formatar_valor(10.006), "R$ 10,01");
}

// =============================================================
// formatar_data
// =============================================================

#[test]
fn data_iso_simples() {
    assert_eq!(formatar_data("2024-01-15"), "15/01/2024");
}

#[test]
fn data_com_sufixo_de_hora() {
    assert_eq!(formatar_data("2024-01-15T00:00:00.000Z"), "15/01/2024");
}

#[test]
fn data_invalida_passa_intacta() {
    assert_eq!(formatar_data("ontem"), "ontem");
    assert_eq!(formatar_data(""), "");
}
