use super::RecordStore;
use crate::error::{AppError, AppResult};
use crate::model::employee::{CreateEmployee, Employee, EmployeeQuery, UpdateEmployee};

fn validate_employee(employee: &Employee) -> AppResult<()> {
    let required = [
        ("first_name", &employee.first_name),
        ("last_name", &employee.last_name),
        ("email", &employee.email),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }

    if !employee.salary.is_finite() || employee.salary < 0.0 {
        return Err(AppError::Validation(
            "salary must be a non-negative number".into(),
        ));
    }

    Ok(())
}

impl RecordStore {
    pub fn list_employees(&self, query: &EmployeeQuery) -> Vec<Employee> {
        self.employees
            .values()
            .filter(|employee| query.matches(employee))
            .cloned()
            .collect()
    }

    pub fn get_employee(&self, id: u64) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn create_employee(&mut self, input: CreateEmployee) -> AppResult<Employee> {
        let mut employee = Employee {
            id: 0,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            position: input.position,
            department: input.department,
            salary: input.salary,
            hire_date: input.hire_date,
            status: input.status,
            phone: input.phone,
            address: input.address,
        };
        validate_employee(&employee)?;

        employee.id = self.employee_ids.next()?;
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// `Ok(None)` when no employee has this id.
    pub fn update_employee(
        &mut self,
        id: u64,
        patch: UpdateEmployee,
    ) -> AppResult<Option<Employee>> {
        let Some(existing) = self.employees.get_mut(&id) else {
            return Ok(None);
        };

        let mut merged = existing.clone();
        patch.apply_to(&mut merged);
        validate_employee(&merged)?;

        *existing = merged.clone();
        Ok(Some(merged))
    }

    /// Attendance records of a deleted employee are kept.
    pub fn delete_employee(&mut self, id: u64) -> bool {
        self.employees.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::new_employee;

    #[test]
    fn create_assigns_unique_increasing_ids() {
        let mut store = RecordStore::default();
        let a = store.create_employee(new_employee("Ann", "Eng")).unwrap();
        let b = store.create_employee(new_employee("Bob", "Eng")).unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.get_employee(a.id), Some(&a));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = RecordStore::default();
        let a = store.create_employee(new_employee("Ann", "Eng")).unwrap();
        assert!(store.delete_employee(a.id));
        let b = store.create_employee(new_employee("Bob", "Eng")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_rejects_blank_required_fields() {
        let mut store = RecordStore::default();
        let mut input = new_employee("Ann", "Eng");
        input.email = "  ".into();

        let err = store.create_employee(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("email")));
        assert_eq!(store.employee_count(), 0);
    }

    #[test]
    fn create_rejects_negative_salary() {
        let mut store = RecordStore::default();
        let mut input = new_employee("Ann", "Eng");
        input.salary = -1.0;
        assert!(matches!(
            store.create_employee(input),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn update_merges_and_missing_id_is_none() {
        let mut store = RecordStore::default();
        let a = store.create_employee(new_employee("Ann", "Eng")).unwrap();

        let updated = store
            .update_employee(
                a.id,
                UpdateEmployee {
                    position: Some("Lead".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.position, "Lead");
        assert_eq!(updated.department, "Eng");

        assert!(
            store
                .update_employee(999, UpdateEmployee::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn invalid_update_leaves_employee_untouched() {
        let mut store = RecordStore::default();
        let a = store.create_employee(new_employee("Ann", "Eng")).unwrap();

        let result = store.update_employee(
            a.id,
            UpdateEmployee {
                first_name: Some(String::new()),
                department: Some("Ops".into()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(store.get_employee(a.id), Some(&a));
    }

    #[test]
    fn delete_missing_is_false() {
        let mut store = RecordStore::default();
        assert!(!store.delete_employee(42));
    }

    #[test]
    fn list_applies_filters() {
        let mut store = RecordStore::default();
        store.create_employee(new_employee("Ann", "Eng")).unwrap();
        store.create_employee(new_employee("Bob", "Sales")).unwrap();

        let eng = store.list_employees(&EmployeeQuery {
            department: Some("Eng".into()),
            ..Default::default()
        });
        assert_eq!(eng.len(), 1);
        assert_eq!(eng[0].first_name, "Ann");
        assert_eq!(store.list_employees(&EmployeeQuery::default()).len(), 2);
    }
}
