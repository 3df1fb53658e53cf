// src/services/agrupamento.rs

use std::collections::HashMap;

use crate::models::clientes::{Setor, Unidade};

/// Uma unidade com os seus setores, para exibição agrupada.
#[derive(Debug)]
pub struct GrupoSetores<'a> {
    pub unidade: &'a Unidade,
    pub setores: Vec<&'a Setor>,
}

/// Agrupa os setores pela unidade dona, preservando a ordem das unidades.
/// Toda unidade vira um grupo, mesmo sem nenhum setor; um setor cuja
/// unidade não está na lista é descartado em silêncio — nunca aparece em
/// dois grupos nem derruba a montagem da tela.
pub fn agrupar_setores_por_unidade<'a>(
    setores: &'a [Setor],
    unidades: &'a [Unidade],
) -> Vec<GrupoSetores<'a>> {
    let mut grupos: Vec<GrupoSetores<'a>> = unidades
        .iter()
        .map(|unidade| GrupoSetores {
            unidade,
            setores: Vec::new(),
        })
        .collect();

    let indice_por_unidade: HashMap<i64, usize> = unidades
        .iter()
        .enumerate()
        .map(|(posicao, unidade)| (unidade.id, posicao))
        .collect();

    for setor in setores {
        if let Some(&posicao) = indice_por_unidade.get(&setor.unidade) {
            grupos[posicao].setores.push(setor);
        }
    }

    grupos
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unidade(id: i64, nome: &str) -> Unidade {
        serde_json::from_value(json!({ "id": id, "cliente": 7, "nome": nome })).unwrap()
    }

    fn setor(id: i64, nome: &str, unidade: i64) -> Setor {
        serde_json::from_value(json!({
            "id": id, "cliente": 7, "unidade": unidade, "nome": nome
        }))
        .unwrap()
    }

    #[test]
    fn um_grupo_por_unidade_na_ordem_de_entrada() {
        let unidades = vec![unidade(2, "U2"), unidade(1, "U1"), unidade(3, "U3")];
        let setores = vec![setor(9, "S1", 1)];

        let grupos = agrupar_setores_por_unidade(&setores, &unidades);

        assert_eq!(grupos.len(), unidades.len());
        let ordem: Vec<i64> = grupos.iter().map(|grupo| grupo.unidade.id).collect();
        assert_eq!(ordem, vec![2, 1, 3]);
    }

    #[test]
    fn unidade_sem_setores_vira_grupo_vazio() {
        let unidades = vec![unidade(1, "U1"), unidade(2, "U2")];
        let setores = vec![setor(9, "S1", 1)];

        let grupos = agrupar_setores_por_unidade(&setores, &unidades);

        assert_eq!(grupos[0].setores.len(), 1);
        assert_eq!(grupos[0].setores[0].nome, "S1");
        assert!(grupos[1].setores.is_empty());
    }

    #[test]
    fn setor_com_unidade_desconhecida_e_descartado() {
        let unidades = vec![unidade(1, "U1")];
        let setores = vec![setor(9, "S1", 1), setor(10, "Órfão", 42)];

        let grupos = agrupar_setores_por_unidade(&setores, &unidades);

        let total: usize = grupos.iter().map(|grupo| grupo.setores.len()).sum();
        assert_eq!(total, 1);
        assert!(total <= setores.len());
    }

    #[test]
    fn sem_unidades_nao_ha_grupos() {
        let setores = vec![setor(9, "S1", 1)];
        let grupos = agrupar_setores_por_unidade(&setores, &[]);
        assert!(grupos.is_empty());
    }
}
